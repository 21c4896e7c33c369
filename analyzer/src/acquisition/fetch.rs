use anyhow::Context;
use polecore::sensor::sample::TriaxialSample;
use std::path::Path;
use std::time::Duration;

/// Fetches timestamped samples from the sensor endpoint and appends them
/// to the CSV log. Returns the number of samples stored.
pub fn fetch_sensor_data(url: &str, csv_path: &Path) -> anyhow::Result<usize> {
    let samples: Vec<TriaxialSample> = ureq::get(url)
        .timeout(Duration::from_secs(8))
        .call()
        .with_context(|| format!("requesting sensor data from {url}"))?
        .into_json()
        .context("decoding sensor payload as a sample list")?;
    anyhow::ensure!(!samples.is_empty(), "no samples received from {url}");

    super::csv::append_samples(csv_path, &samples)
}
