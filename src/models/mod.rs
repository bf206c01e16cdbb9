//! Regression model loading and inference components

use crate::types::features::FeatureVector;
use anyhow::Result;

pub mod inference;
pub mod linear;
pub mod loader;
#[cfg(feature = "onnx")]
pub mod onnx;

pub use inference::Predictor;
pub use linear::LinearModel;
pub use loader::ModelLoader;
#[cfg(feature = "onnx")]
pub use onnx::OnnxModel;

/// A fitted regression model.
///
/// The only capability the forecast needs is a single-sample prediction.
/// Errors raised by the model (e.g. an input shape the model was not fitted
/// on) are returned as-is.
pub trait Model: Send + Sync {
    /// Model name used in logs and error messages
    fn name(&self) -> &str;

    /// Predict the closing price for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64>;
}
