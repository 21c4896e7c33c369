pub mod extractor;
pub mod fft;
pub mod stats;

pub use extractor::{SpectralExtraction, SpectralExtractor, SpectralPeak, SpectralPeakSet};
pub use fft::FftHelper;
pub use stats::StatsHelper;
