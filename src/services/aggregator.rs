//! Aggregation of a forecast with per-day resource estimates.

use chrono::Utc;
use log::warn;

use super::estimator::estimate_resources;
use crate::forecast::{ForecastError, ForecastProvider};
use crate::models::{DayResources, ForecastBundle, ForecastResult};

/// Run one forecast and attach resource estimates to every returned day.
///
/// The provider is consulted exactly once; the estimator runs once per point
/// with the point's `yhat` rounded to the nearest whole patient. Ordering is
/// preserved and `generated_at` is stamped after the last day is assembled.
pub fn build_forecast_bundle(
    provider: &ForecastProvider,
    city: &str,
    horizon_days: u32,
    use_model: bool,
) -> Result<ForecastBundle, ForecastError> {
    let forecast = provider.forecast(city, horizon_days, use_model)?;

    let results = forecast
        .points
        .into_iter()
        .map(|point| {
            let patients = patients_from_yhat(point.yhat);
            let (summary, breakdown) = estimate_resources(patients);
            ForecastResult {
                date: point.date,
                prediction: point,
                resources: DayResources { summary, breakdown },
            }
        })
        .collect();

    Ok(ForecastBundle {
        city: city.to_string(),
        model_source: forecast.source,
        generated_at: Utc::now(),
        results,
    })
}

/// Round a point estimate to a whole patient count, clamping negatives to
/// zero. A negative prediction can only come from a trained model artifact.
fn patients_from_yhat(yhat: f64) -> u32 {
    let rounded = yhat.round();
    if rounded < 0.0 {
        warn!("Negative inflow prediction {} clamped to zero patients", yhat);
        0
    } else {
        rounded as u32
    }
}
