//! Prediction result

use super::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single closing price prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Predicted closing price
    pub predicted_close: f64,
    /// Features the prediction was made from
    pub features: FeatureVector,
}

impl Forecast {
    pub fn new(predicted_close: f64, features: FeatureVector) -> Self {
        Self {
            predicted_close,
            features,
        }
    }
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicted closing price: {}", format_price(self.predicted_close))
    }
}

/// Shortest round-trip rendering with a fractional part (`101.0`), switching
/// to `1e+16` / `1e-05` style exponents outside `[1e-4, 1e16)`.
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{:?}", value);
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return format!("{:?}", value),
    };

    if (-4..16).contains(&exponent) {
        format!("{:?}", value)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}
