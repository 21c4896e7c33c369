use num_complex::Complex64;
use rustfft::{num_traits::Zero, Fft, FftPlanner};

/// Wraps the `rustfft` planner for real-valued acceleration signals and
/// exposes the one-sided amplitude spectrum.
pub struct FftHelper {
    fft: std::sync::Arc<dyn Fft<f64>>,
    size: usize,
}

impl FftHelper {
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Self { fft, size }
    }

    /// One-sided amplitude spectrum (bins `0..=size/2`) of a real signal.
    /// Shorter inputs are zero-padded to the planned size.
    pub fn amplitude_spectrum(&self, input: &[f64]) -> Vec<f64> {
        let mut buffer: Vec<Complex64> = input
            .iter()
            .map(|&value| Complex64::new(value, 0.0))
            .collect();
        buffer.resize(self.size, Complex64::zero());

        self.fft.process(&mut buffer);
        buffer
            .iter()
            .take(self.size / 2 + 1)
            .map(|c| c.norm())
            .collect()
    }

    /// Frequency axis matching `amplitude_spectrum` for a sampling rate.
    pub fn bin_frequencies(&self, sampling_hz: f64) -> Vec<f64> {
        (0..=self.size / 2)
            .map(|k| k as f64 * sampling_hz / self.size as f64)
            .collect()
    }
}
