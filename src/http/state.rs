//! Application state for the HTTP server.

use std::sync::Arc;

use crate::alerts::AdvisoryBoard;
use crate::forecast::ForecastProvider;
use crate::services::HospitalCapacityEvaluator;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Forecast provider (model artifact plus synthetic fallback)
    pub provider: Arc<ForecastProvider>,
    /// Hospital capacity evaluator backed by the registry
    pub evaluator: Arc<HospitalCapacityEvaluator>,
    /// Advisory feed served to dashboards
    pub advisories: Arc<AdvisoryBoard>,
}

impl AppState {
    /// Create a new application state from the shared services.
    pub fn new(
        provider: Arc<ForecastProvider>,
        evaluator: Arc<HospitalCapacityEvaluator>,
        advisories: Arc<AdvisoryBoard>,
    ) -> Self {
        Self {
            provider,
            evaluator,
            advisories,
        }
    }
}
