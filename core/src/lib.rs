//! Signal-to-diagnosis core for wooden utility pole health assessment.
//!
//! The modules turn a raw triaxial accelerometer window and a measured pole
//! geometry into a damage severity verdict: spectral peak extraction, an
//! Euler-Bernoulli cantilever frequency model, theoretical-vs-measured peak
//! matching, and tolerance-based classification. The core performs no I/O;
//! acquisition, persistence, and plotting live in the analyzer driver.

pub mod assessment;
pub mod geometry;
pub mod model;
pub mod prelude;
pub mod sensor;
pub mod spectral;
pub mod telemetry;

pub use prelude::{AnalysisError, AnalysisResult};
