//! Model input features

use serde::{Deserialize, Serialize};

/// Feature vector consumed by the forecasting model.
///
/// Positional: the model was fitted on exactly these two columns in this
/// order. Values are not range-checked; negative prices, NaN and infinities
/// pass through to the model unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Previous day's closing price (`close_lag1`)
    pub previous_close: f64,
    /// 5-day moving average of the close (`ma_5`)
    pub moving_average_5: f64,
}

impl FeatureVector {
    /// Number of features the model expects
    pub const LEN: usize = 2;

    /// Features in model input order
    pub fn as_array(&self) -> [f64; Self::LEN] {
        [self.previous_close, self.moving_average_5]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order() {
        let features = FeatureVector {
            previous_close: 100.0,
            moving_average_5: 98.5,
        };

        assert_eq!(features.as_array(), [100.0, 98.5]);
    }
}
