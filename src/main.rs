//! Close Forecast - Main Entry Point
//!
//! Loads the fitted model, asks for the previous close and the 5-day moving
//! average, and prints the predicted closing price.

use anyhow::Result;
use close_forecast::{app, config::AppConfig, logging};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    logging::init(&config.logging)?;
    info!(model_path = %config.model.path, "Configuration loaded successfully");

    let stdin = io::stdin();
    app::run(&config, stdin.lock(), io::stdout())?;

    Ok(())
}
