//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    AlertsQuery, BannerResponse, CityAdvisories, ForecastBundle, ForecastQuery, HealthResponse,
    HospitalQuery, IcuStatus, OxygenStatus, StaffStatus,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::HospitalId;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /
///
/// Root banner confirming the service is up.
pub async fn home() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "HealthGuard AI Backend Running".to_string(),
    })
}

/// GET /health
///
/// Health check endpoint reporting whether the trained model is serving.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model = if state.provider.has_model() {
        "loaded".to_string()
    } else {
        "absent".to_string()
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model,
    })
}

// =============================================================================
// Forecasting
// =============================================================================

/// GET /forecast/patient-inflow-with-resources
///
/// Forecast patient inflow for a city and attach per-day resource estimates.
pub async fn forecast_with_resources(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> HandlerResult<ForecastBundle> {
    let provider = state.provider.clone();

    // Sampling and aggregation are synchronous CPU work
    let bundle = tokio::task::spawn_blocking(move || {
        services::build_forecast_bundle(&provider, &query.city, query.days, query.use_model)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(bundle))
}

// =============================================================================
// Hospital Capacity
// =============================================================================

/// GET /hospital/staff
///
/// Staffing status for one hospital.
pub async fn hospital_staff(
    State(state): State<AppState>,
    Query(query): Query<HospitalQuery>,
) -> HandlerResult<StaffStatus> {
    let id = HospitalId::new(query.hospital_id);
    let status = state.evaluator.staff_status(&id).await?;
    Ok(Json(status))
}

/// GET /hospital/icu
///
/// ICU bed status for one hospital.
pub async fn hospital_icu(
    State(state): State<AppState>,
    Query(query): Query<HospitalQuery>,
) -> HandlerResult<IcuStatus> {
    let id = HospitalId::new(query.hospital_id);
    let status = state.evaluator.icu_status(&id).await?;
    Ok(Json(status))
}

/// GET /hospital/oxygen
///
/// Oxygen supply status for one hospital.
pub async fn hospital_oxygen(
    State(state): State<AppState>,
    Query(query): Query<HospitalQuery>,
) -> HandlerResult<OxygenStatus> {
    let id = HospitalId::new(query.hospital_id);
    let status = state.evaluator.oxygen_status(&id).await?;
    Ok(Json(status))
}

// =============================================================================
// Alerts
// =============================================================================

/// GET /alerts/city
///
/// Public-health advisories for a city.
pub async fn city_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertsQuery>,
) -> Json<CityAdvisories> {
    Json(state.advisories.for_city(&query.city))
}
