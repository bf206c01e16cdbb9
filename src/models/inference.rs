//! Single-shot closing price inference

use crate::feature_extractor::FeatureBuilder;
use crate::models::Model;
use crate::types::features::FeatureVector;
use crate::types::forecast::Forecast;
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::debug;

/// Runs the loaded model on a feature vector
pub struct Predictor {
    /// Fitted model, loaded once at startup
    model: Box<dyn Model>,
    /// Builds features in the model's training order
    feature_builder: FeatureBuilder,
}

impl Predictor {
    /// Create a predictor around an already loaded model
    pub fn new(model: Box<dyn Model>) -> Self {
        Self {
            model,
            feature_builder: FeatureBuilder::new(),
        }
    }

    /// Name of the underlying model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Predict the closing price for a feature vector.
    ///
    /// Shape is not checked here; whatever the model raises is returned.
    pub fn predict(&self, features: &FeatureVector) -> Result<Forecast> {
        let start_time = Instant::now();

        let predicted_close = self
            .model
            .predict(features)
            .with_context(|| format!("Model '{}' prediction failed", self.model.name()))?;

        debug!(
            model = %self.model.name(),
            previous_close = features.previous_close,
            moving_average_5 = features.moving_average_5,
            predicted_close = predicted_close,
            inference_us = start_time.elapsed().as_micros() as u64,
            "Inference complete"
        );

        Ok(Forecast::new(predicted_close, *features))
    }

    /// Build features from raw inputs and predict
    pub fn forecast(&self, previous_close: f64, moving_average_5: f64) -> Result<Forecast> {
        let features = self.feature_builder.build(previous_close, moving_average_5);
        self.predict(&features)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Model returning a fixed value and counting calls
    pub(crate) struct ConstantModel {
        pub value: f64,
        pub calls: Arc<AtomicUsize>,
    }

    impl ConstantModel {
        pub(crate) fn new(value: f64) -> Self {
            Self {
                value,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl Model for ConstantModel {
        fn name(&self) -> &str {
            "constant"
        }

        fn predict(&self, _features: &FeatureVector) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(self.value)
        }
    }

    struct FailingModel;

    impl Model for FailingModel {
        fn name(&self) -> &str {
            "failing"
        }

        fn predict(&self, _features: &FeatureVector) -> Result<f64> {
            anyhow::bail!("X has 2 features, but model is expecting 3 features as input")
        }
    }

    #[test]
    fn test_constant_prediction() {
        let predictor = Predictor::new(Box::new(ConstantModel::new(101.2)));

        for (a, b) in [(100.0, 98.5), (0.0, 0.0), (-5.0, f64::NAN)] {
            let forecast = predictor.forecast(a, b).unwrap();
            assert_eq!(forecast.predicted_close, 101.2);
            assert_eq!(forecast.features.as_array()[0], a);
        }
    }

    #[test]
    fn test_model_error_propagates() {
        let predictor = Predictor::new(Box::new(FailingModel));

        let err = predictor.forecast(100.0, 98.5).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Model 'failing' prediction failed"));
        assert!(chain.contains("expecting 3 features"));
    }
}
