use anyhow::Context;
use polecore::sensor::sample::TriaxialSample;
use polecore::sensor::window::AccelerationWindow;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Reads the sensor CSV (`timestamp, ax, ay, az`) into an acceleration
/// window. The sampling rate is estimated from the timestamp column.
pub fn read_sensor_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<AccelerationWindow> {
    let path_ref = path.as_ref();
    let mut reader = csv::Reader::from_path(path_ref)
        .with_context(|| format!("opening sensor data {}", path_ref.display()))?;

    let mut samples: Vec<TriaxialSample> = Vec::new();
    for row in reader.deserialize() {
        let sample: TriaxialSample =
            row.with_context(|| format!("parsing sensor data {}", path_ref.display()))?;
        samples.push(sample);
    }

    let window = AccelerationWindow::from_samples(&samples)
        .with_context(|| format!("building window from {}", path_ref.display()))?;
    Ok(window)
}

/// Appends samples to the CSV log, writing the header only for a new file.
pub fn append_samples<P: AsRef<Path>>(
    path: P,
    samples: &[TriaxialSample],
) -> anyhow::Result<usize> {
    let path_ref = path.as_ref();
    if let Some(parent) = path_ref.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating data directory {}", parent.display()))?;
        }
    }

    let is_new = !path_ref.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path_ref)
        .with_context(|| format!("opening sensor log {}", path_ref.display()))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(is_new)
        .from_writer(file);
    for sample in samples {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    Ok(samples.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn csv_reads_into_a_window_with_estimated_rate() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "timestamp,ax,ay,az").unwrap();
        for i in 0..64 {
            writeln!(temp, "{},0.01,0.50,0.02", i as f64 * 0.005).unwrap();
        }
        let path = temp.into_temp_path();

        let window = read_sensor_csv(&path).unwrap();
        assert_eq!(window.len(), 64);
        assert!((window.sampling_hz() - 200.0).abs() < 1e-6);
    }

    #[test]
    fn appended_samples_round_trip() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.into_temp_path();
        // Start from a fresh path so the header gets written.
        std::fs::remove_file(&path).unwrap();

        let samples: Vec<TriaxialSample> = (0..40)
            .map(|i| TriaxialSample {
                timestamp: i as f64 * 0.01,
                ax: Some(0.1),
                ay: Some(0.2),
                az: Some(9.8),
            })
            .collect();
        assert_eq!(append_samples(&path, &samples).unwrap(), 40);

        let window = read_sensor_csv(&path).unwrap();
        assert_eq!(window.len(), 40);
        assert!((window.sampling_hz() - 100.0).abs() < 1e-6);
    }
}
