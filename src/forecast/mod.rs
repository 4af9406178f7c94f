//! Patient-inflow forecasting: samplers, the synthetic generator, the trained
//! model artifact, and the provider that arbitrates between them.

pub mod model;
pub mod provider;
pub mod sampler;
pub mod synthetic;

pub use model::{InflowModel, ModelError, MODEL_DRIVER};
pub use provider::{Forecast, ForecastError, ForecastProvider, DEFAULT_MAX_HORIZON_DAYS};
pub use sampler::{HistoricalInflowSampler, InflowSample, InflowSampler, LiveInflowSampler};
pub use synthetic::SyntheticForecastGenerator;

/// Round to two decimal places, the precision used throughout the API.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
