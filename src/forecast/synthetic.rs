//! Synthetic forecast generation, the fallback when no trained model exists.

use chrono::NaiveDate;
use rand::prelude::*;
use std::ops::Range;

use super::round2;
use super::sampler::{is_weekend, InflowSample, InflowSampler, LiveInflowSampler};
use crate::models::ForecastPoint;

/// Uniform margin applied independently to each uncertainty bound.
const BOUND_MARGIN: Range<f64> = 10.0..25.0;

/// Produces plausible inflow forecasts with uncertainty bounds and driver
/// labels when no trained model is available. Stochastic per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticForecastGenerator {
    sampler: LiveInflowSampler,
}

impl SyntheticForecastGenerator {
    pub fn new() -> Self {
        Self {
            sampler: LiveInflowSampler::new(),
        }
    }

    /// Generate `days` consecutive forecast points starting at `start_date`.
    pub fn generate(&self, start_date: NaiveDate, days: usize) -> Vec<ForecastPoint> {
        let samples = self.sampler.sample_series(start_date, days);
        let mut rng = thread_rng();
        samples
            .iter()
            .map(|sample| point_from_sample(&mut rng, sample))
            .collect()
    }
}

/// Wrap one inflow sample into a forecast point: round to two decimals,
/// attach independently drawn bounds (lower clamped at zero, the point
/// estimate is not), and label the dominant driver.
pub(crate) fn point_from_sample<R: Rng>(rng: &mut R, sample: &InflowSample) -> ForecastPoint {
    let yhat = round2(sample.inflow);
    let yhat_lower = round2((yhat - rng.gen_range(BOUND_MARGIN)).max(0.0));
    let yhat_upper = round2(yhat + rng.gen_range(BOUND_MARGIN));
    ForecastPoint {
        date: sample.date,
        yhat,
        yhat_lower,
        yhat_upper,
        driver: driver_label(sample.pollution_term, sample.date).to_string(),
    }
}

/// First matching rule wins: heavy shock, moderate shock, weekend, baseline.
pub(crate) fn driver_label(pollution_term: f64, date: NaiveDate) -> &'static str {
    if pollution_term >= 30.0 {
        "High pollution spike"
    } else if pollution_term >= 20.0 {
        "Moderate pollution effect"
    } else if is_weekend(date) {
        "Weekend effect"
    } else {
        "Baseline variation"
    }
}
