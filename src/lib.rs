//! Close Forecast Library
//!
//! Loads a fitted regression model and predicts the next closing price
//! from the previous close and the 5-day moving average.

pub mod app;
pub mod config;
pub mod console;
pub mod feature_extractor;
pub mod logging;
pub mod models;
pub mod types;

pub use config::AppConfig;
pub use feature_extractor::FeatureBuilder;
pub use models::{inference::Predictor, loader::ModelLoader, Model};
pub use types::{features::FeatureVector, forecast::Forecast};
