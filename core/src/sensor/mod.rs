pub mod sample;
pub mod window;

pub use sample::TriaxialSample;
pub use window::{AccelerationWindow, Axis};
