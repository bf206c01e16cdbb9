//! Feature construction for closing price model inference.
//!
//! Builds the input vector in the same column order the regression model
//! was trained with.

use crate::types::features::FeatureVector;

/// Training column names, in model input order.
const FEATURE_NAMES: [&str; FeatureVector::LEN] = ["close_lag1", "ma_5"];

/// Builds model input features from raw price inputs.
pub struct FeatureBuilder;

impl FeatureBuilder {
    /// Create a new feature builder.
    pub fn new() -> Self {
        Self
    }

    /// Build the feature vector for one prediction.
    ///
    /// Order is `[previous_close, moving_average_5]`. Inputs are not
    /// validated or transformed.
    pub fn build(&self, previous_close: f64, moving_average_5: f64) -> FeatureVector {
        FeatureVector {
            previous_close,
            moving_average_5,
        }
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FeatureVector::LEN
    }

    /// Get feature names (matching training order).
    pub fn feature_names(&self) -> &'static [&'static str] {
        &FEATURE_NAMES
    }
}

impl Default for FeatureBuilder {
    fn default() -> Self {
        Self::new()
    }
}
