//! Historical dataset generation utility.
//!
//! Writes a reproducible CSV of daily patient-inflow counts for offline
//! model training. The same seed always produces the same file.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_dataset -- [output.csv] [days] [seed]
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;

use healthguard::forecast::{HistoricalInflowSampler, InflowSampler};

/// First day of the generated series.
const START_DATE: (i32, u32, u32) = (2023, 1, 1);

fn main() -> Result<()> {
    // Output and shape - read from args or use defaults
    let args: Vec<String> = std::env::args().collect();
    let output_path = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("synthetic_patient_inflow.csv");
    let days: usize = args
        .get(2)
        .map(|s| s.parse())
        .transpose()
        .context("days must be a positive integer")?
        .unwrap_or(HistoricalInflowSampler::DEFAULT_DAYS);
    let seed: u64 = args
        .get(3)
        .map(|s| s.parse())
        .transpose()
        .context("seed must be an integer")?
        .unwrap_or(HistoricalInflowSampler::DEFAULT_SEED);

    println!("=== Synthetic Patient Inflow Generator ===");
    println!("Output file: {}", output_path);
    println!("Days: {}", days);
    println!("Seed: {}", seed);
    println!();

    let (year, month, day) = START_DATE;
    let start = NaiveDate::from_ymd_opt(year, month, day).expect("start date is valid");

    println!("Generating synthetic patient inflow CSV...");
    let samples = HistoricalInflowSampler::new(seed).sample_series(start, days);

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;
    writer.write_record(["ds", "y"])?;
    for sample in &samples {
        writer.write_record([
            sample.date.to_string(),
            (sample.inflow.round() as i64).to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Saved {}, rows = {}", output_path, samples.len());
    Ok(())
}
