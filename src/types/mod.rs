//! Type definitions for the close forecast

pub mod features;
pub mod forecast;

pub use features::FeatureVector;
pub use forecast::Forecast;
