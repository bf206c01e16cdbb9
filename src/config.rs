//! Configuration management for the close forecast

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Default location of the optional configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// Default location of the fitted model
pub const DEFAULT_MODEL_PATH: &str = "model/financial_forecasting_model.onnx";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}

/// Model configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the fitted model (.onnx or .json)
    pub path: String,
    /// Number of threads for ONNX inference (default: 1)
    #[serde(default = "default_onnx_threads")]
    pub onnx_threads: usize,
}

fn default_onnx_threads() -> usize {
    1
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Load configuration from the default file (if present) and environment
    pub fn load() -> Result<Self> {
        Self::build(File::with_name(DEFAULT_CONFIG_PATH).required(false))
    }

    /// Load configuration from a specific path, which must exist
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::build(File::from(path.as_ref()))
    }

    fn build<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();

        let config = Config::builder()
            .set_default("model.path", defaults.model.path)?
            .set_default("model.onnx_threads", defaults.model.onnx_threads as u64)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", "pretty")?
            .add_source(file)
            .add_source(
                Environment::with_prefix("FORECAST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                path: DEFAULT_MODEL_PATH.to_string(),
                onnx_threads: default_onnx_threads(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}
