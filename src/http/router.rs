//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        // Forecasting
        .route(
            "/forecast/patient-inflow-with-resources",
            get(handlers::forecast_with_resources),
        )
        // Hospital capacity
        .route("/hospital/staff", get(handlers::hospital_staff))
        .route("/hospital/icu", get(handlers::hospital_icu))
        .route("/hospital/oxygen", get(handlers::hospital_oxygen))
        // Alerts
        .route("/alerts/city", get(handlers::city_alerts))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
