//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Events go to stderr so stdout
/// only carries the prompts and the forecast line.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(config)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Filter built from the configured level alone
fn configured_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| anyhow::anyhow!("Invalid log level {:?}: {}", config.level, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format: LogFormat::Pretty,
        }
    }

    #[test]
    fn test_invalid_level() {
        let err = configured_filter(&logging("close_forecast=loud")).unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_valid_levels() {
        for level in ["warn", "debug", "close_forecast=info,ort=warn"] {
            assert!(configured_filter(&logging(level)).is_ok());
        }
    }
}
