//! Forecast value objects produced by the inflow forecasting pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::resources::DayResources;

/// Provenance of a forecast: trained model output or the synthetic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastSource {
    ModelBased,
    Simulated,
}

/// Single-day inflow prediction with uncertainty bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Forecast date
    pub date: NaiveDate,
    /// Predicted patient inflow
    pub yhat: f64,
    /// Lower uncertainty bound, clamped at zero
    pub yhat_lower: f64,
    /// Upper uncertainty bound
    pub yhat_upper: f64,
    /// Dominant driver behind the prediction
    #[serde(rename = "drivers")]
    pub driver: String,
}

/// One forecast day paired with the resources needed to absorb it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Forecast date (repeated from the prediction for flat access)
    pub date: NaiveDate,
    /// The inflow prediction for this day
    pub prediction: ForecastPoint,
    /// Estimated resource requirements
    pub resources: DayResources,
}

/// Complete forecast response for one city query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastBundle {
    /// City the forecast was requested for
    pub city: String,
    /// Whether predictions came from the trained model or the synthetic fallback
    pub model_source: ForecastSource,
    /// Captured once, when aggregation completes
    pub generated_at: DateTime<Utc>,
    /// One entry per forecast day, ascending by date
    pub results: Vec<ForecastResult>,
}
