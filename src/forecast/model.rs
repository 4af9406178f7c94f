//! Trained inflow-model artifact: loading, validation, and inference.
//!
//! The artifact is a JSON parameter set produced by offline training against
//! the historical dataset. Loading happens once at startup; absence of the
//! file is a normal condition handled by the provider, not an error here.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::round2;
use crate::models::ForecastPoint;

/// Driver label attached to every model-based prediction.
pub const MODEL_DRIVER: &str = "Model-based forecast";

fn default_interval_z() -> f64 {
    1.96
}

/// Errors raised while loading or querying a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid model artifact: {0}")]
    Invalid(String),
    #[error("forecast dates exceed the supported calendar range")]
    DateRange,
}

/// Linear-trend inflow model with weekly seasonality.
///
/// `yhat(d) = base_level + trend_per_day * age(d) + weekly[weekday(d)]`
/// where `age` counts days since the training cutoff. Uncertainty bounds
/// are symmetric: `interval_z * sigma` on each side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflowModel {
    /// Training cutoff; trend age is measured from this instant's date
    pub trained_at: DateTime<Utc>,
    /// City the training series was collected for
    pub city: String,
    /// Inflow level at the training cutoff
    pub base_level: f64,
    /// Linear trend per elapsed day
    pub trend_per_day: f64,
    /// Additive weekday terms, Monday first, exactly seven entries
    pub weekly: Vec<f64>,
    /// Residual standard deviation from training
    pub sigma: f64,
    /// Z-score multiplier for the prediction interval
    #[serde(default = "default_interval_z")]
    pub interval_z: f64,
}

impl InflowModel {
    /// Load and validate an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.weekly.len() != 7 {
            return Err(ModelError::Invalid(format!(
                "expected 7 weekly terms, found {}",
                self.weekly.len()
            )));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(ModelError::Invalid(format!(
                "sigma must be a non-negative finite number, got {}",
                self.sigma
            )));
        }
        if !self.interval_z.is_finite() || self.interval_z < 0.0 {
            return Err(ModelError::Invalid(format!(
                "interval_z must be a non-negative finite number, got {}",
                self.interval_z
            )));
        }
        Ok(())
    }

    /// Predict `horizon_days` consecutive points starting at `start`.
    ///
    /// Unlike load failures, inference failures are surfaced to the caller;
    /// the provider does not downgrade a failing query to the synthetic path.
    pub fn predict(&self, start: NaiveDate, horizon_days: u32) -> Result<Vec<ForecastPoint>, ModelError> {
        self.validate()?;

        let trained_on = self.trained_at.date_naive();
        let margin = round2(self.interval_z * self.sigma);
        let mut points = Vec::with_capacity(horizon_days as usize);
        for i in 0..horizon_days {
            let date = start
                .checked_add_days(Days::new(u64::from(i)))
                .ok_or(ModelError::DateRange)?;
            let age_days = date.signed_duration_since(trained_on).num_days() as f64;
            let weekday_term = self.weekly[date.weekday().num_days_from_monday() as usize];
            let yhat = round2(self.base_level + self.trend_per_day * age_days + weekday_term);
            points.push(ForecastPoint {
                date,
                yhat,
                yhat_lower: round2(yhat - margin),
                yhat_upper: round2(yhat + margin),
                driver: MODEL_DRIVER.to_string(),
            });
        }
        Ok(points)
    }
}
