//! Model artifact loader

use super::linear::LinearModel;
use super::Model;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Loader for fitted regression models
pub struct ModelLoader {
    /// Number of threads for ONNX inference
    #[cfg_attr(not(feature = "onnx"), allow(dead_code))]
    onnx_threads: usize,
}

impl ModelLoader {
    /// Create a new model loader with default settings (1 thread)
    pub fn new() -> Self {
        Self::with_threads(1)
    }

    /// Create a new model loader with specified number of threads
    pub fn with_threads(onnx_threads: usize) -> Self {
        Self {
            onnx_threads: onnx_threads.max(1),
        }
    }

    /// Load a fitted model from file.
    ///
    /// The format is picked from the extension: `.onnx` graphs run on ONNX
    /// Runtime, `.json` files hold linear regression coefficients. The model
    /// name is the file stem.
    pub fn load_model<P: AsRef<Path>>(&self, path: P) -> Result<Box<dyn Model>> {
        let path = path.as_ref();

        if !path.exists() {
            anyhow::bail!("Failed to load model from {:?}: file not found", path);
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let model: Box<dyn Model> = match extension.as_str() {
            "json" => {
                let model = LinearModel::load_from_file(path, &name)
                    .context(format!("Failed to load model from {:?}", path))?;
                info!(
                    model = %name,
                    weights = ?model.params().weights,
                    intercept = model.params().intercept,
                    "Linear coefficients loaded"
                );
                Box::new(model)
            }
            "onnx" => self
                .load_onnx(path, &name)
                .context(format!("Failed to load model from {:?}", path))?,
            other => anyhow::bail!(
                "Failed to load model from {:?}: unsupported model format '{}'",
                path,
                other
            ),
        };

        info!(model = %model.name(), path = %path.display(), "Model ready");

        Ok(model)
    }

    #[cfg(feature = "onnx")]
    fn load_onnx(&self, path: &Path, name: &str) -> Result<Box<dyn Model>> {
        let model = super::onnx::OnnxModel::load(path, name, self.onnx_threads)?;
        Ok(Box::new(model))
    }

    #[cfg(not(feature = "onnx"))]
    fn load_onnx(&self, path: &Path, _name: &str) -> Result<Box<dyn Model>> {
        anyhow::bail!(
            "Failed to load model from {:?}: built without the `onnx` feature",
            path
        )
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new()
    }
}
