//! Linear regression model stored as JSON coefficients

use super::Model;
use crate::types::features::FeatureVector;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Fitted linear regression parameters.
///
/// On disk: `{ "weights": [w0, w1], "intercept": b }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    /// One coefficient per feature, in feature order
    pub weights: Vec<f64>,
    /// Bias term
    #[serde(default)]
    pub intercept: f64,
}

/// Linear regression model `y = w · x + b`
#[derive(Debug, Clone)]
pub struct LinearModel {
    name: String,
    params: LinearParams,
}

impl LinearModel {
    /// Create a model from fitted parameters
    pub fn new(name: &str, params: LinearParams) -> Self {
        Self {
            name: name.to_string(),
            params,
        }
    }

    /// Read fitted parameters from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P, name: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).context(format!("Failed to open {:?}", path))?;
        let params: LinearParams = serde_json::from_reader(BufReader::new(file))
            .context(format!("Failed to parse linear model parameters from {:?}", path))?;

        Ok(Self::new(name, params))
    }

    pub fn params(&self) -> &LinearParams {
        &self.params
    }
}

impl Model for LinearModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        let x = features.as_array();
        ensure!(
            self.params.weights.len() == x.len(),
            "Feature shape mismatch: model expects {} features, got {}",
            self.params.weights.len(),
            x.len()
        );

        let dot: f64 = self
            .params
            .weights
            .iter()
            .zip(x.iter())
            .map(|(w, v)| w * v)
            .sum();

        Ok(dot + self.params.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn features(previous_close: f64, moving_average_5: f64) -> FeatureVector {
        FeatureVector {
            previous_close,
            moving_average_5,
        }
    }

    #[test]
    fn test_predict() {
        let model = LinearModel::new(
            "linear",
            LinearParams {
                weights: vec![0.5, 0.5],
                intercept: 1.0,
            },
        );

        let prediction = model.predict(&features(100.0, 98.0)).unwrap();
        assert!((prediction - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_shape_mismatch() {
        let model = LinearModel::new(
            "linear",
            LinearParams {
                weights: vec![1.0, 2.0, 3.0],
                intercept: 0.0,
            },
        );

        let err = model.predict(&features(1.0, 2.0)).unwrap_err();
        assert!(err.to_string().contains("expects 3 features, got 2"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"weights": [0.8, 0.2], "intercept": 1.5}}"#).unwrap();

        let model = LinearModel::load_from_file(file.path(), "linear").unwrap();
        assert_eq!(model.params().weights, vec![0.8, 0.2]);
        assert_eq!(model.params().intercept, 1.5);
        assert_eq!(model.name(), "linear");
    }

    #[test]
    fn test_load_corrupt_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a model").unwrap();

        assert!(LinearModel::load_from_file(file.path(), "linear").is_err());
    }
}
