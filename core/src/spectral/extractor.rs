use crate::prelude::{AnalysisError, AnalysisResult};
use crate::sensor::window::{AccelerationWindow, Axis};
use crate::spectral::fft::FftHelper;
use crate::spectral::stats::StatsHelper;
use crate::telemetry::LogManager;
use serde::{Deserialize, Serialize};

/// Fewest samples accepted for a meaningful frequency resolution. With 32
/// samples the one-sided spectrum has 16 non-DC bins, so the top three
/// peaks are always distinct.
pub const MIN_SAMPLES: usize = 32;

/// Number of dominant peaks reported.
pub const PEAK_COUNT: usize = 3;

/// One spectral line of the one-sided amplitude spectrum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpectralPeak {
    pub frequency_hz: f64,
    pub amplitude: f64,
}

/// Dominant peaks in descending amplitude order, DC excluded. Never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectralPeakSet {
    peaks: Vec<SpectralPeak>,
}

impl SpectralPeakSet {
    pub(crate) fn new(peaks: Vec<SpectralPeak>) -> Self {
        Self { peaks }
    }

    pub fn peaks(&self) -> &[SpectralPeak] {
        &self.peaks
    }

    /// Highest-amplitude peak.
    pub fn dominant(&self) -> SpectralPeak {
        self.peaks[0]
    }

    pub fn frequencies(&self) -> Vec<f64> {
        self.peaks.iter().map(|p| p.frequency_hz).collect()
    }
}

/// Full one-sided spectrum, exposed for external plotting collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmplitudeSpectrum {
    pub frequencies_hz: Vec<f64>,
    pub amplitudes: Vec<f64>,
}

/// Outcome of one spectral extraction pass.
#[derive(Debug, Clone)]
pub struct SpectralExtraction {
    /// Axis carrying the largest oscillation energy.
    pub axis: Axis,
    pub axis_rms: f64,
    pub peaks: SpectralPeakSet,
    pub spectrum: AmplitudeSpectrum,
}

/// Extracts the dominant mechanical frequencies from an acceleration window.
///
/// Selects the axis with the highest RMS (first of X, Y, Z wins ties),
/// removes the mean, and reports the top three non-DC bins of the one-sided
/// amplitude spectrum.
pub struct SpectralExtractor {
    min_samples: usize,
    logger: LogManager,
}

impl SpectralExtractor {
    pub fn new() -> Self {
        Self {
            min_samples: MIN_SAMPLES,
            logger: LogManager::new("spectral"),
        }
    }

    pub fn extract(&self, window: &AccelerationWindow) -> AnalysisResult<SpectralExtraction> {
        let length = window.len();
        if length < self.min_samples {
            return Err(AnalysisError::InsufficientData(format!(
                "need at least {} samples for spectral resolution, got {}",
                self.min_samples, length
            )));
        }

        let mut selected: Option<(Axis, &[f64], f64)> = None;
        for (axis, values) in window.axes() {
            let rms = StatsHelper::rms(values);
            let better = match &selected {
                Some((_, _, best_rms)) => rms > *best_rms,
                None => true,
            };
            if better {
                selected = Some((*axis, values.as_slice(), rms));
            }
        }
        let (axis, signal, axis_rms) = selected.ok_or_else(|| {
            AnalysisError::InsufficientData("no acceleration axes supplied".into())
        })?;
        self.logger.record(&format!(
            "dominant axis {} (RMS {:.4})",
            axis.label(),
            axis_rms
        ));

        let mean = StatsHelper::mean(signal);
        let centered: Vec<f64> = signal.iter().map(|v| v - mean).collect();

        let fft = FftHelper::new(length);
        let amplitudes = fft.amplitude_spectrum(&centered);
        let frequencies = fft.bin_frequencies(window.sampling_hz());

        // Rank all non-DC bins by amplitude; stable sort keeps the lower
        // bin first when amplitudes tie.
        let mut order: Vec<usize> = (1..amplitudes.len()).collect();
        order.sort_by(|&a, &b| amplitudes[b].total_cmp(&amplitudes[a]));
        let peaks: Vec<SpectralPeak> = order
            .iter()
            .take(PEAK_COUNT)
            .map(|&i| SpectralPeak {
                frequency_hz: frequencies[i],
                amplitude: amplitudes[i],
            })
            .collect();
        self.logger.record(&format!(
            "dominant frequencies {:?} Hz",
            peaks.iter().map(|p| p.frequency_hz).collect::<Vec<_>>()
        ));

        Ok(SpectralExtraction {
            axis,
            axis_rms,
            peaks: SpectralPeakSet::new(peaks),
            spectrum: AmplitudeSpectrum {
                frequencies_hz: frequencies,
                amplitudes,
            },
        })
    }
}

impl Default for SpectralExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn tone(frequency: f64, amplitude: f64, offset: f64, fs: f64, count: usize) -> Vec<f64> {
        (0..count)
            .map(|i| offset + amplitude * (2.0 * PI * frequency * i as f64 / fs).sin())
            .collect()
    }

    #[test]
    fn pure_tone_peak_lands_within_one_bin() {
        let fs = 64.0;
        let count = 256;
        let f0 = 5.1;
        let window = AccelerationWindow::new(Some(tone(f0, 1.0, 0.0, fs, count)), None, None, fs)
            .unwrap();

        let extraction = SpectralExtractor::new().extract(&window).unwrap();
        let bin_width = fs / count as f64;
        assert!((extraction.peaks.dominant().frequency_hz - f0).abs() <= bin_width);
    }

    #[test]
    fn dc_bias_never_wins_the_peak_ranking() {
        let fs = 64.0;
        let count = 256;
        // Heavy constant offset against a modest oscillation.
        let window =
            AccelerationWindow::new(Some(tone(4.0, 0.2, 9.81, fs, count)), None, None, fs).unwrap();

        let extraction = SpectralExtractor::new().extract(&window).unwrap();
        for peak in extraction.peaks.peaks() {
            assert!(peak.frequency_hz > 0.0);
        }
        let bin_width = fs / count as f64;
        assert!((extraction.peaks.dominant().frequency_hz - 4.0).abs() <= bin_width);
    }

    #[test]
    fn axis_with_highest_rms_is_selected() {
        let fs = 64.0;
        let count = 128;
        let window = AccelerationWindow::new(
            Some(tone(4.0, 0.1, 0.0, fs, count)),
            Some(tone(4.0, 1.0, 0.0, fs, count)),
            Some(tone(4.0, 0.5, 0.0, fs, count)),
            fs,
        )
        .unwrap();

        let extraction = SpectralExtractor::new().extract(&window).unwrap();
        assert_eq!(extraction.axis, Axis::Y);
    }

    #[test]
    fn equal_rms_resolves_to_the_first_axis() {
        let fs = 64.0;
        let count = 128;
        let signal = tone(4.0, 0.5, 0.0, fs, count);
        let window =
            AccelerationWindow::new(Some(signal.clone()), Some(signal), None, fs).unwrap();

        let extraction = SpectralExtractor::new().extract(&window).unwrap();
        assert_eq!(extraction.axis, Axis::X);
    }

    #[test]
    fn short_windows_are_rejected() {
        let fs = 64.0;
        let window =
            AccelerationWindow::new(Some(tone(4.0, 1.0, 0.0, fs, MIN_SAMPLES - 1)), None, None, fs)
                .unwrap();
        assert!(matches!(
            SpectralExtractor::new().extract(&window),
            Err(AnalysisError::InsufficientData(_))
        ));
    }

    #[test]
    fn extraction_reports_three_distinct_peaks() {
        let fs = 64.0;
        let count = 256;
        let signal: Vec<f64> = (0..count)
            .map(|i| {
                let t = i as f64 / fs;
                (2.0 * PI * 4.0 * t).sin() + 0.5 * (2.0 * PI * 9.0 * t).sin()
                    + 0.25 * (2.0 * PI * 14.0 * t).sin()
            })
            .collect();
        let window = AccelerationWindow::new(Some(signal), None, None, fs).unwrap();

        let extraction = SpectralExtractor::new().extract(&window).unwrap();
        let peaks = extraction.peaks.peaks();
        assert_eq!(peaks.len(), PEAK_COUNT);
        assert!(peaks[0].amplitude >= peaks[1].amplitude);
        assert!(peaks[1].amplitude >= peaks[2].amplitude);
        assert!(peaks[0].frequency_hz != peaks[1].frequency_hz);
    }
}
