//! First-mode cantilever eigenvalue and shape function.

/// First root of the cantilever characteristic equation `cosh(b)cos(b) = -1`.
pub const BETA_1: f64 = 1.875;

/// Fraction of a uniform cantilever's mass participating in mode 1.
pub const MODE1_EFFECTIVE_MASS_FRACTION: f64 = 0.23;

/// Cantilever mode-1 shape value at position `x` along a beam of length
/// `length`, normalized so the tip value is 1. `x` is clamped to the beam.
pub fn mode1_shape(x: f64, length: f64) -> f64 {
    let xi = BETA_1 * x.clamp(0.0, length) / length;
    let alpha = (BETA_1.cosh() + BETA_1.cos()) / (BETA_1.sinh() + BETA_1.sin());
    let numerator = xi.cosh() - xi.cos() - alpha * (xi.sinh() - xi.sin());
    let denominator = BETA_1.cosh() - BETA_1.cos() - alpha * (BETA_1.sinh() - BETA_1.sin());
    numerator / denominator
}
