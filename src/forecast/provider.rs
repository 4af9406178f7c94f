//! Forecast provider: decides between the trained model and the synthetic
//! fallback, and owns the model-load lifecycle.

use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::model::{InflowModel, ModelError};
use super::synthetic::SyntheticForecastGenerator;
use crate::models::{ForecastPoint, ForecastSource};

/// Upper bound on the forecast horizon unless overridden by configuration.
pub const DEFAULT_MAX_HORIZON_DAYS: u32 = 365;

/// Errors surfaced by [`ForecastProvider::forecast`].
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("invalid forecast horizon: {days} days (expected 1..={max})")]
    InvalidHorizon { days: u32, max: u32 },
    #[error("model inference failed: {0}")]
    Model(#[from] ModelError),
}

/// An ordered forecast plus its provenance.
#[derive(Debug, Clone)]
pub struct Forecast {
    pub points: Vec<ForecastPoint>,
    pub source: ForecastSource,
}

/// Serves inflow forecasts, preferring the trained model when one was loaded
/// at startup and the caller did not opt out.
///
/// Model-load failure is non-fatal and leaves the provider in synthetic-only
/// mode. A failure while querying an already loaded model is the opposite:
/// it is surfaced to the caller, never silently downgraded.
pub struct ForecastProvider {
    model: Option<Arc<InflowModel>>,
    generator: SyntheticForecastGenerator,
    max_horizon_days: u32,
}

impl ForecastProvider {
    pub fn new(model: Option<Arc<InflowModel>>) -> Self {
        Self {
            model,
            generator: SyntheticForecastGenerator::new(),
            max_horizon_days: DEFAULT_MAX_HORIZON_DAYS,
        }
    }

    /// Attempt a one-time artifact load. Missing or unreadable artifacts are
    /// logged and tolerated; the provider then serves synthetic forecasts.
    pub fn from_artifact(path: &Path) -> Self {
        let model = match InflowModel::load(path) {
            Ok(model) => {
                info!(
                    "Loaded inflow model from {} (trained {})",
                    path.display(),
                    model.trained_at
                );
                Some(Arc::new(model))
            }
            Err(err) => {
                warn!("Inflow model unavailable, serving synthetic forecasts: {}", err);
                None
            }
        };
        Self::new(model)
    }

    pub fn with_max_horizon(mut self, days: u32) -> Self {
        self.max_horizon_days = days;
        self
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Forecast `horizon_days` days starting today (UTC).
    pub fn forecast(
        &self,
        city: &str,
        horizon_days: u32,
        use_model: bool,
    ) -> Result<Forecast, ForecastError> {
        self.forecast_from(city, Utc::now().date_naive(), horizon_days, use_model)
    }

    /// Forecast from an explicit start date. Split out so callers and tests
    /// can pin the calendar.
    pub fn forecast_from(
        &self,
        city: &str,
        start: NaiveDate,
        horizon_days: u32,
        use_model: bool,
    ) -> Result<Forecast, ForecastError> {
        if horizon_days == 0 || horizon_days > self.max_horizon_days {
            return Err(ForecastError::InvalidHorizon {
                days: horizon_days,
                max: self.max_horizon_days,
            });
        }

        match (&self.model, use_model) {
            (Some(model), true) => {
                let points = model.predict(start, horizon_days)?;
                debug!("Model-based forecast: city={} horizon={}", city, horizon_days);
                Ok(Forecast {
                    points,
                    source: ForecastSource::ModelBased,
                })
            }
            _ => {
                debug!("Synthetic forecast: city={} horizon={}", city, horizon_days);
                let points = self.generator.generate(start, horizon_days as usize);
                Ok(Forecast {
                    points,
                    source: ForecastSource::Simulated,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn trained_model() -> InflowModel {
        InflowModel {
            trained_at: "2025-01-01T00:00:00Z".parse().unwrap(),
            city: "Mumbai".to_string(),
            base_level: 220.0,
            trend_per_day: 0.05,
            weekly: vec![0.0; 7],
            sigma: 10.0,
            interval_z: 1.96,
        }
    }

    #[test]
    fn test_without_model_always_simulated() {
        let provider = ForecastProvider::new(None);
        let forecast = provider.forecast_from("Mumbai", start(), 7, true).unwrap();
        assert_eq!(forecast.source, ForecastSource::Simulated);
        assert_eq!(forecast.points.len(), 7);
    }

    #[test]
    fn test_with_model_and_opt_in_uses_model() {
        let provider = ForecastProvider::new(Some(Arc::new(trained_model())));
        let forecast = provider.forecast_from("Mumbai", start(), 7, true).unwrap();
        assert_eq!(forecast.source, ForecastSource::ModelBased);
        assert!(forecast
            .points
            .iter()
            .all(|p| p.driver == "Model-based forecast"));
    }

    #[test]
    fn test_with_model_but_opt_out_uses_synthetic() {
        let provider = ForecastProvider::new(Some(Arc::new(trained_model())));
        let forecast = provider.forecast_from("Mumbai", start(), 7, false).unwrap();
        assert_eq!(forecast.source, ForecastSource::Simulated);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let provider = ForecastProvider::new(None);
        let err = provider.forecast_from("Mumbai", start(), 0, true).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon { days: 0, .. }));
    }

    #[test]
    fn test_horizon_above_max_rejected() {
        let provider = ForecastProvider::new(None);
        let err = provider
            .forecast_from("Mumbai", start(), 366, true)
            .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon { days: 366, .. }));
    }

    #[test]
    fn test_custom_max_horizon_enforced() {
        let provider = ForecastProvider::new(None).with_max_horizon(10);
        assert!(provider.forecast_from("Mumbai", start(), 10, true).is_ok());
        let err = provider
            .forecast_from("Mumbai", start(), 11, true)
            .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon { .. }));
    }

    #[test]
    fn test_model_query_failure_is_surfaced() {
        // Hand-built model with a malformed weekly table; predict re-validates
        let mut model = trained_model();
        model.weekly = vec![0.0; 3];
        let provider = ForecastProvider::new(Some(Arc::new(model)));
        let err = provider.forecast_from("Mumbai", start(), 7, true).unwrap_err();
        assert!(matches!(err, ForecastError::Model(ModelError::Invalid(_))));
    }

    #[test]
    fn test_from_artifact_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ForecastProvider::from_artifact(&dir.path().join("absent.json"));
        assert!(!provider.has_model());
        let forecast = provider.forecast_from("Mumbai", start(), 7, true).unwrap();
        assert_eq!(forecast.source, ForecastSource::Simulated);
    }

    #[test]
    fn test_from_artifact_loads_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inflow_model.json");
        std::fs::write(&path, serde_json::to_string(&trained_model()).unwrap()).unwrap();
        let provider = ForecastProvider::from_artifact(&path);
        assert!(provider.has_model());
    }
}
