use crate::spectral::extractor::SpectralPeakSet;
use serde::{Deserialize, Serialize};

/// A theoretical frequency paired with its closest measured spectral peak.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrequencyComparison {
    pub theoretical_hz: f64,
    pub measured_hz: f64,
    /// Signed percentage: (measured - theoretical) / theoretical * 100.
    pub deviation_percent: f64,
}

impl FrequencyComparison {
    pub fn new(theoretical_hz: f64, measured_hz: f64) -> Self {
        let deviation_percent = (measured_hz - theoretical_hz) / theoretical_hz * 100.0;
        Self {
            theoretical_hz,
            measured_hz,
            deviation_percent,
        }
    }
}

/// Pairs theoretical frequencies with measured spectral peaks.
pub struct FrequencyMatcher;

impl FrequencyMatcher {
    /// Peak frequency minimizing the absolute difference to `target_hz`.
    /// A NaN target passes through unmatched; equidistant peaks resolve to
    /// the one listed first in the set.
    pub fn closest_peak(target_hz: f64, peaks: &SpectralPeakSet) -> f64 {
        if target_hz.is_nan() {
            return f64::NAN;
        }
        let mut best = f64::NAN;
        let mut best_distance = f64::INFINITY;
        for peak in peaks.peaks() {
            let distance = (peak.frequency_hz - target_hz).abs();
            if distance < best_distance {
                best = peak.frequency_hz;
                best_distance = distance;
            }
        }
        best
    }

    /// Convenience: match and derive the signed deviation in one step.
    pub fn compare(theoretical_hz: f64, peaks: &SpectralPeakSet) -> FrequencyComparison {
        FrequencyComparison::new(theoretical_hz, Self::closest_peak(theoretical_hz, peaks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::extractor::SpectralPeak;

    fn peak_set(frequencies: &[f64]) -> SpectralPeakSet {
        SpectralPeakSet::new(
            frequencies
                .iter()
                .enumerate()
                .map(|(i, &f)| SpectralPeak {
                    frequency_hz: f,
                    amplitude: 10.0 - i as f64,
                })
                .collect(),
        )
    }

    #[test]
    fn closest_peak_minimizes_absolute_difference() {
        let peaks = peak_set(&[2.1, 4.3, 8.0]);
        assert_eq!(FrequencyMatcher::closest_peak(4.0, &peaks), 4.3);
        assert_eq!(FrequencyMatcher::closest_peak(7.0, &peaks), 8.0);
    }

    #[test]
    fn equidistant_peaks_resolve_to_the_first_listed() {
        let peaks = peak_set(&[10.0, 6.0]);
        assert_eq!(FrequencyMatcher::closest_peak(8.0, &peaks), 10.0);
    }

    #[test]
    fn nan_target_propagates_unmatched() {
        let peaks = peak_set(&[2.0, 4.0]);
        assert!(FrequencyMatcher::closest_peak(f64::NAN, &peaks).is_nan());
    }

    #[test]
    fn comparison_carries_a_signed_deviation() {
        let peaks = peak_set(&[1.9, 8.0]);
        let comparison = FrequencyMatcher::compare(2.0, &peaks);
        assert_eq!(comparison.measured_hz, 1.9);
        assert!((comparison.deviation_percent + 5.0).abs() < 1e-9);
    }

    #[test]
    fn nan_theoretical_yields_nan_deviation() {
        let peaks = peak_set(&[2.0]);
        let comparison = FrequencyMatcher::compare(f64::NAN, &peaks);
        assert!(comparison.deviation_percent.is_nan());
    }
}
