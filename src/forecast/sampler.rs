//! Patient-inflow samplers.
//!
//! Two samplers share one series engine. The live sampler feeds the synthetic
//! forecast fallback and draws fresh randomness on every call; the historical
//! sampler replays a fixed seed so offline training datasets are reproducible.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand_distr::Normal;
use std::f64::consts::TAU;

/// Inflow multiplier applied on Saturdays and Sundays.
pub(crate) const WEEKEND_FACTOR: f64 = 0.85;

/// Pollution shock magnitudes and their draw weights (live mode).
const SHOCK_VALUES: [f64; 4] = [0.0, 10.0, 20.0, 35.0];
const SHOCK_WEIGHTS: [f64; 4] = [0.60, 0.25, 0.10, 0.05];

/// One simulated day of patient inflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InflowSample {
    pub date: NaiveDate,
    /// Simulated admissions for the day (fractional; callers round as needed)
    pub inflow: f64,
    /// Pollution contribution already included in `inflow`, kept separately
    /// for driver labeling
    pub pollution_term: f64,
}

/// Source of simulated daily admission counts.
pub trait InflowSampler {
    /// Produce `days` consecutive samples starting at `start`.
    ///
    /// Dates past the supported calendar bound saturate at the bound.
    fn sample_series(&self, start: NaiveDate, days: usize) -> Vec<InflowSample>;
}

/// Seasonal shape of a simulated inflow series.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SeriesShape {
    /// Mean admissions around which the series oscillates
    pub base_level: f64,
    /// Seasonal swing amplitude
    pub amplitude: f64,
    /// Full sine cycles across the sampled horizon
    pub cycles: f64,
    /// Standard deviation of the per-day Gaussian noise
    pub noise_sd: f64,
    /// Multiplier applied on Saturdays and Sundays
    pub weekend_factor: f64,
}

/// Pollution contribution model for a series.
pub(crate) enum PollutionModel {
    /// Discrete shock events drawn per day (live mode)
    Shocks {
        index: WeightedIndex<f64>,
        values: [f64; 4],
    },
    /// Smooth sinusoidal confound (historical mode)
    Sinusoid { amplitude: f64, cycles: f64 },
}

impl PollutionModel {
    pub(crate) fn shocks() -> Self {
        let index =
            WeightedIndex::new(SHOCK_WEIGHTS).expect("shock weights are positive and finite");
        PollutionModel::Shocks {
            index,
            values: SHOCK_VALUES,
        }
    }

    pub(crate) fn sinusoid(amplitude: f64, cycles: f64) -> Self {
        PollutionModel::Sinusoid { amplitude, cycles }
    }

    fn term<R: Rng>(&self, rng: &mut R, day: usize, horizon: usize) -> f64 {
        match self {
            PollutionModel::Shocks { index, values } => values[index.sample(rng)],
            PollutionModel::Sinusoid { amplitude, cycles } => {
                amplitude * (TAU * cycles * day as f64 / horizon as f64).sin()
            }
        }
    }
}

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Core series engine shared by both samplers.
pub(crate) fn simulate_series<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    days: usize,
    shape: &SeriesShape,
    pollution: &PollutionModel,
) -> Vec<InflowSample> {
    let noise = Normal::new(0.0, shape.noise_sd).expect("Invalid normal distribution parameters");

    let mut samples = Vec::with_capacity(days);
    for i in 0..days {
        let date = start
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(NaiveDate::MAX);
        let seasonal =
            shape.base_level + shape.amplitude * (TAU * shape.cycles * i as f64 / days as f64).sin();
        let weekday_factor = if is_weekend(date) {
            shape.weekend_factor
        } else {
            1.0
        };
        let pollution_term = pollution.term(rng, i, days);
        let inflow = seasonal * weekday_factor + rng.sample(noise) + pollution_term;
        samples.push(InflowSample {
            date,
            inflow,
            pollution_term,
        });
    }
    samples
}

/// Stochastic sampler backing live synthetic forecasts.
///
/// Every call draws fresh randomness: one sine cycle around 250 admissions,
/// weekend damping, Gaussian noise, and discrete pollution shocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveInflowSampler;

impl LiveInflowSampler {
    const SHAPE: SeriesShape = SeriesShape {
        base_level: 250.0,
        amplitude: 40.0,
        cycles: 1.0,
        noise_sd: 15.0,
        weekend_factor: WEEKEND_FACTOR,
    };

    pub fn new() -> Self {
        LiveInflowSampler
    }
}

impl InflowSampler for LiveInflowSampler {
    fn sample_series(&self, start: NaiveDate, days: usize) -> Vec<InflowSample> {
        let mut rng = thread_rng();
        simulate_series(
            &mut rng,
            start,
            days,
            &Self::SHAPE,
            &PollutionModel::shocks(),
        )
    }
}

/// Seeded sampler for reproducible historical training datasets.
///
/// Two sine cycles around 200 admissions with a smooth pollution confound;
/// the seed is replayed on every call, so identical inputs give identical
/// series.
#[derive(Debug, Clone, Copy)]
pub struct HistoricalInflowSampler {
    seed: u64,
}

impl HistoricalInflowSampler {
    pub const DEFAULT_SEED: u64 = 42;
    pub const DEFAULT_DAYS: usize = 730;

    const SHAPE: SeriesShape = SeriesShape {
        base_level: 200.0,
        amplitude: 40.0,
        cycles: 2.0,
        noise_sd: 15.0,
        weekend_factor: WEEKEND_FACTOR,
    };
    const POLLUTION_AMPLITUDE: f64 = 10.0;
    const POLLUTION_CYCLES: f64 = 2.0;

    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for HistoricalInflowSampler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl InflowSampler for HistoricalInflowSampler {
    fn sample_series(&self, start: NaiveDate, days: usize) -> Vec<InflowSample> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        simulate_series(
            &mut rng,
            start,
            days,
            &Self::SHAPE,
            &PollutionModel::sinusoid(Self::POLLUTION_AMPLITUDE, Self::POLLUTION_CYCLES),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        // 2025-06-02 is a Monday
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_is_weekend() {
        assert!(!is_weekend(monday()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap())); // Saturday
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 6, 8).unwrap())); // Sunday
    }

    #[test]
    fn test_live_series_has_consecutive_dates() {
        let samples = LiveInflowSampler::new().sample_series(monday(), 14);
        assert_eq!(samples.len(), 14);
        for (i, sample) in samples.iter().enumerate() {
            assert_eq!(
                sample.date,
                monday() + chrono::Days::new(i as u64),
                "dates must advance one day at a time"
            );
        }
    }

    #[test]
    fn test_live_pollution_terms_are_shock_values() {
        let samples = LiveInflowSampler::new().sample_series(monday(), 200);
        for sample in samples {
            assert!(
                [0.0, 10.0, 20.0, 35.0].contains(&sample.pollution_term),
                "unexpected shock value {}",
                sample.pollution_term
            );
        }
    }

    #[test]
    fn test_historical_series_is_reproducible() {
        let sampler = HistoricalInflowSampler::new(HistoricalInflowSampler::DEFAULT_SEED);
        let first = sampler.sample_series(monday(), 730);
        let second = sampler.sample_series(monday(), 730);
        assert_eq!(first, second);
    }

    #[test]
    fn test_historical_series_differs_across_seeds() {
        let a = HistoricalInflowSampler::new(1).sample_series(monday(), 30);
        let b = HistoricalInflowSampler::new(2).sample_series(monday(), 30);
        assert_ne!(a, b);
    }

    #[test]
    fn test_weekend_damping_applied_without_noise() {
        let shape = SeriesShape {
            base_level: 100.0,
            amplitude: 0.0,
            cycles: 1.0,
            noise_sd: 0.0,
            weekend_factor: WEEKEND_FACTOR,
        };
        let mut rng = StdRng::seed_from_u64(0);
        // Monday through Sunday
        let samples = simulate_series(
            &mut rng,
            monday(),
            7,
            &shape,
            &PollutionModel::sinusoid(0.0, 1.0),
        );
        for sample in &samples[..5] {
            assert!((sample.inflow - 100.0).abs() < 1e-9);
        }
        for sample in &samples[5..] {
            assert!((sample.inflow - 85.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sinusoid_pollution_stays_within_amplitude() {
        let sampler = HistoricalInflowSampler::default();
        let samples = sampler.sample_series(monday(), 365);
        for sample in samples {
            assert!(sample.pollution_term.abs() <= 10.0 + 1e-9);
        }
    }
}
