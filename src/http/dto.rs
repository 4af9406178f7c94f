//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Response bodies are re-exported from the api module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Alerts
    Advisory, CityAdvisories, Severity,
    // Forecast
    ForecastBundle, ForecastPoint, ForecastResult, ForecastSource,
    // Hospital status
    IcuStatus, OxygenStatus, StaffStatus,
    // Resources
    DayResources, ResourceBreakdown, ResourceSummary,
};

/// Query parameters for the forecast-with-resources endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastQuery {
    /// City to forecast for
    #[serde(default = "default_city")]
    pub city: String,
    /// Forecast horizon in days
    #[serde(default = "default_days")]
    pub days: u32,
    /// Whether to use the trained model when one is loaded
    #[serde(default = "default_true")]
    pub use_model: bool,
}

/// Query parameters for the hospital status endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalQuery {
    /// Hospital to evaluate
    #[serde(default = "default_hospital_id")]
    pub hospital_id: String,
}

/// Query parameters for the city alerts endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsQuery {
    /// City to fetch advisories for
    #[serde(default = "default_city")]
    pub city: String,
}

fn default_city() -> String {
    "Mumbai".to_string()
}

fn default_days() -> u32 {
    7
}

fn default_true() -> bool {
    true
}

fn default_hospital_id() -> String {
    "H123".to_string()
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Whether a trained model artifact is serving forecasts
    pub model: String,
}

/// Root banner response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    pub message: String,
}
