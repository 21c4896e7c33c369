use crate::geometry::GeometryProfile;
use crate::model::mode_shape::{mode1_shape, BETA_1, MODE1_EFFECTIVE_MASS_FRACTION};
use crate::prelude::{CableConfig, MaterialProperties};
use crate::telemetry::LogManager;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The formula is singular as L^4 approaches zero.
const LENGTH_EPSILON: f64 = 1e-12;

/// Taper sampling resolution for the lumped-parameter mean diameter.
const MIN_PROFILE_SAMPLES: usize = 100;

/// How an attached cable's mass couples into the first mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CableCoupling {
    /// Weight the cable mass by the mode-1 shape at the attachment point.
    ModeShape,
    /// Historical fallback: treat the cable as lumped at the tip (`phi = 1`).
    /// Kept only for comparability with legacy results.
    TipLumped,
}

/// First-mode natural frequency of a ground-fixed, tapered cantilever pole.
///
/// Euler-Bernoulli theory over the mean diameter of the free section. A
/// non-computable geometry yields `f64::NAN`; callers must not classify on
/// the sentinel.
pub struct BeamFrequencyModel {
    profile: GeometryProfile,
    material: MaterialProperties,
    cable: Option<CableConfig>,
    coupling: CableCoupling,
    samples: usize,
    logger: LogManager,
}

impl BeamFrequencyModel {
    pub fn new(profile: GeometryProfile, material: MaterialProperties) -> Self {
        Self {
            profile,
            material,
            cable: None,
            coupling: CableCoupling::ModeShape,
            samples: MIN_PROFILE_SAMPLES,
            logger: LogManager::new("beam-model"),
        }
    }

    pub fn with_cable(mut self, cable: CableConfig) -> Self {
        self.cable = Some(cable);
        self
    }

    pub fn with_coupling(mut self, coupling: CableCoupling) -> Self {
        self.coupling = coupling;
        self
    }

    pub fn profile(&self) -> &GeometryProfile {
        &self.profile
    }

    /// First natural frequency [Hz] of the free cantilever, `NAN` when the
    /// free length is non-positive or numerically degenerate.
    pub fn free_frequency(&self, free_length_m: f64) -> f64 {
        if !free_length_m.is_finite() || free_length_m <= 0.0 {
            return f64::NAN;
        }
        let l4 = free_length_m.powi(4);
        if l4 <= LENGTH_EPSILON {
            return f64::NAN;
        }

        let count = self.samples.max(MIN_PROFILE_SAMPLES);
        let diameters: Array1<f64> = (0..count)
            .map(|i| {
                let h = free_length_m * i as f64 / (count - 1) as f64;
                self.profile.diameter_at(h)
            })
            .collect();
        let d_avg = diameters.mean().unwrap_or(f64::NAN);

        // Solid circular cross-section.
        let second_moment = PI / 64.0 * d_avg.powi(4);
        let mass_per_m = self.material.density_kg_m3 * PI / 4.0 * d_avg.powi(2);

        let omega =
            BETA_1.powi(2) * (self.material.young_modulus_pa * second_moment / (mass_per_m * l4)).sqrt();
        let mut frequency = omega / (2.0 * PI);

        if let Some(cable) = &self.cable {
            let cable_mass = cable.total_mass();
            if cable_mass > 0.0 {
                let effective_mass = MODE1_EFFECTIVE_MASS_FRACTION * mass_per_m * free_length_m;
                let phi = match self.coupling {
                    CableCoupling::TipLumped => 1.0,
                    CableCoupling::ModeShape => {
                        mode1_shape(free_length_m - cable.attachment_offset, free_length_m)
                    }
                };
                frequency *=
                    (effective_mass / (effective_mass + cable_mass * phi * phi)).sqrt();
            }
        }

        self.logger.record_debug(&format!(
            "free frequency {:.3} Hz for L {:.2} m (d_avg {:.4} m)",
            frequency, free_length_m, d_avg
        ));
        frequency
    }

    /// Frequency with a lateral brace attached at `support_height_m`, using
    /// the empirical stiffness amplification `1 + 0.3 * clamp(h/L, 0.1, 0.9)`.
    /// The free-case sentinel propagates.
    pub fn supported_frequency(&self, free_length_m: f64, support_height_m: f64) -> f64 {
        let f_free = self.free_frequency(free_length_m);
        if f_free.is_nan() {
            return f64::NAN;
        }
        let ratio = (support_height_m / free_length_m).clamp(0.1, 0.9);
        f_free * (1.0 + 0.3 * ratio)
    }
}
