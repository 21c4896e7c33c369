pub mod beam;
pub mod mode_shape;

pub use beam::{BeamFrequencyModel, CableCoupling};
