//! ONNX regression model backed by ONNX Runtime

use super::Model;
use crate::types::features::FeatureVector;
use anyhow::{Context, Result};
use ort::session::{builder::GraphOptimizationLevel, Session, SessionOutputs};
use ort::tensor::TensorElementType;
use ort::value::{Tensor, ValueType};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

/// Loaded ONNX regressor with its input metadata
pub struct OnnxModel {
    /// Model name
    name: String,
    /// ONNX Runtime session (runs need exclusive access)
    session: Mutex<Session>,
    /// Input name for the model
    input_name: String,
    /// Whether the graph was exported with double precision inputs
    double_input: bool,
}

impl OnnxModel {
    /// Build an inference session from an ONNX file
    pub fn load<P: AsRef<Path>>(path: P, name: &str, onnx_threads: usize) -> Result<Self> {
        let path = path.as_ref();

        info!(model = %name, path = %path.display(), threads = onnx_threads, "Loading ONNX model");

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(onnx_threads)?
            .commit_from_file(path)
            .context(format!("Failed to build ONNX session from {:?}", path))?;

        let (input_name, double_input) = session
            .inputs
            .first()
            .map(|i| {
                let double = matches!(
                    i.input_type,
                    ValueType::Tensor {
                        ty: TensorElementType::Float64,
                        ..
                    }
                );
                (i.name.clone(), double)
            })
            .unwrap_or_else(|| ("float_input".to_string(), false));

        info!(
            model = %name,
            input = %input_name,
            double_input = double_input,
            "Model loaded successfully"
        );

        Ok(Self {
            name: name.to_string(),
            session: Mutex::new(session),
            input_name,
            double_input,
        })
    }

    /// Pull the regression value out of the session outputs.
    ///
    /// skl2onnx regressors emit a single `[batch, 1]` tensor; the first
    /// numeric tensor's first element is the prediction.
    fn extract_prediction(&self, outputs: &SessionOutputs) -> Result<f64> {
        for (name, output) in outputs.iter() {
            if let Ok((_, data)) = output.try_extract_tensor::<f64>() {
                if let Some(&value) = data.first() {
                    debug!(model = %self.name, output = %name, "Extracted f64 prediction");
                    return Ok(value);
                }
            }

            if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
                if let Some(&value) = data.first() {
                    debug!(model = %self.name, output = %name, "Extracted f32 prediction");
                    return Ok(f64::from(value));
                }
            }
        }

        anyhow::bail!("Model '{}' produced no numeric output", self.name)
    }
}

impl Model for OnnxModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        // Prepare input tensor - shape [1, num_features]
        let shape = vec![1_i64, FeatureVector::LEN as i64];
        let values = features.as_array();

        let mut session = self
            .session
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;

        if self.double_input {
            let input_tensor = Tensor::from_array((shape, values.to_vec()))
                .context("Failed to create input tensor")?;
            let outputs = session.run(ort::inputs![&self.input_name => input_tensor])?;
            self.extract_prediction(&outputs)
        } else {
            let values: Vec<f32> = values.iter().map(|&v| v as f32).collect();
            let input_tensor =
                Tensor::from_array((shape, values)).context("Failed to create input tensor")?;
            let outputs = session.run(ort::inputs![&self.input_name => input_tensor])?;
            self.extract_prediction(&outputs)
        }
    }
}
