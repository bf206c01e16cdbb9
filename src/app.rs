//! Forecast session: load once, prompt twice, predict once

use crate::config::{AppConfig, ModelConfig};
use crate::console::{Prompter, MOVING_AVERAGE_PROMPT, PREVIOUS_CLOSE_PROMPT};
use crate::feature_extractor::FeatureBuilder;
use crate::models::{ModelLoader, Predictor};
use crate::types::forecast::Forecast;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

/// Load the configured model and wrap it in a predictor
pub fn load_predictor(config: &ModelConfig) -> Result<Predictor> {
    let loader = ModelLoader::with_threads(config.onnx_threads);
    let model = loader.load_model(&config.path)?;

    let feature_builder = FeatureBuilder::new();
    info!(
        model = %model.name(),
        feature_count = feature_builder.feature_count(),
        features = ?feature_builder.feature_names(),
        "Predictor initialized"
    );

    Ok(Predictor::new(model))
}

/// Prompt for both inputs, predict and print the result line.
///
/// Input is fully parsed before the model is called.
pub fn run_session<R: BufRead, W: Write>(
    predictor: &Predictor,
    input: R,
    output: W,
) -> Result<Forecast> {
    let mut prompter = Prompter::new(input, output);

    let previous_close = prompter.read_f64(PREVIOUS_CLOSE_PROMPT)?;
    let moving_average_5 = prompter.read_f64(MOVING_AVERAGE_PROMPT)?;

    let forecast = predictor.forecast(previous_close, moving_average_5)?;
    prompter.print_line(&forecast.to_string())?;

    info!(
        model = %predictor.model_name(),
        predicted_close = forecast.predicted_close,
        "Forecast produced"
    );

    Ok(forecast)
}

/// Load the model, then run one session. A load failure happens before any
/// prompt is written.
pub fn run<R: BufRead, W: Write>(config: &AppConfig, input: R, output: W) -> Result<Forecast> {
    let predictor = load_predictor(&config.model)?;
    run_session(&predictor, input, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inference::tests::ConstantModel;
    use std::io::Cursor;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_session_prints_forecast() {
        let predictor = Predictor::new(Box::new(ConstantModel::new(101.2)));
        let mut output = Vec::new();

        let forecast =
            run_session(&predictor, Cursor::new("100.0\n98.5\n"), &mut output).unwrap();

        assert_eq!(forecast.predicted_close, 101.2);
        assert_eq!(forecast.features.as_array(), [100.0, 98.5]);

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with(PREVIOUS_CLOSE_PROMPT));
        assert!(printed.ends_with("Predicted closing price: 101.2\n"));
    }

    #[test]
    fn test_bad_input_never_reaches_model() {
        for input in ["abc\n98.5\n", "100.0\nxyz\n", "100.0\n"] {
            let model = ConstantModel::new(101.2);
            let calls = model.calls.clone();
            let predictor = Predictor::new(Box::new(model));

            let result = run_session(&predictor, Cursor::new(input), Vec::new());

            assert!(result.is_err());
            assert_eq!(calls.load(Ordering::Relaxed), 0);
        }
    }

    #[test]
    fn test_linear_model_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("financial_forecasting_model.json");
        std::fs::write(&path, r#"{"weights": [0.6, 0.4], "intercept": 0.0}"#).unwrap();

        let mut config = AppConfig::default();
        config.model.path = path.to_string_lossy().into_owned();
        let mut output = Vec::new();

        let forecast = run(&config, Cursor::new("100\n100\n"), &mut output).unwrap();

        assert!((forecast.predicted_close - 100.0).abs() < 1e-9);
        assert!(String::from_utf8(output)
            .unwrap()
            .contains("Predicted closing price: "));
    }

    #[test]
    fn test_missing_model_fails_before_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.model.path = dir
            .path()
            .join("financial_forecasting_model.onnx")
            .to_string_lossy()
            .into_owned();
        let mut output = Vec::new();

        let err = run(&config, Cursor::new("100.0\n98.5\n"), &mut output).unwrap_err();

        assert!(err.to_string().contains("Failed to load model"));
        assert!(output.is_empty());
    }
}
