use crate::prelude::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One measured (height-from-top, diameter) sample of the pole taper.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ControlPoint {
    pub height_m: f64,
    pub diameter_m: f64,
}

/// Tapered pole geometry built from field measurements.
///
/// Heights are measured from the pole top downwards and must be strictly
/// increasing; diameters must be non-decreasing over the measured range.
/// The inverse lookup additionally requires a strictly increasing taper.
#[derive(Debug, Clone)]
pub struct GeometryProfile {
    points: Vec<ControlPoint>,
    strictly_tapered: bool,
}

impl GeometryProfile {
    pub fn new(points: Vec<ControlPoint>) -> AnalysisResult<Self> {
        if points.len() < 2 {
            return Err(AnalysisError::Configuration(
                "geometry profile needs at least two control points".into(),
            ));
        }
        for point in &points {
            if !point.height_m.is_finite() || !point.diameter_m.is_finite() {
                return Err(AnalysisError::Configuration(
                    "geometry control points must be finite".into(),
                ));
            }
            if point.diameter_m <= 0.0 {
                return Err(AnalysisError::Configuration(
                    "control-point diameters must be positive".into(),
                ));
            }
        }
        let mut strictly_tapered = true;
        for pair in points.windows(2) {
            if pair[1].height_m <= pair[0].height_m {
                return Err(AnalysisError::Configuration(
                    "control-point heights must be strictly increasing".into(),
                ));
            }
            if pair[1].diameter_m < pair[0].diameter_m {
                return Err(AnalysisError::Configuration(
                    "control-point diameters must not decrease with height".into(),
                ));
            }
            if pair[1].diameter_m == pair[0].diameter_m {
                strictly_tapered = false;
            }
        }
        Ok(Self {
            points,
            strictly_tapered,
        })
    }

    pub fn min_diameter(&self) -> f64 {
        self.points[0].diameter_m
    }

    pub fn max_diameter(&self) -> f64 {
        self.points[self.points.len() - 1].diameter_m
    }

    /// Valid ground-circumference range implied by the measured diameters.
    pub fn circumference_range(&self) -> (f64, f64) {
        (PI * self.min_diameter(), PI * self.max_diameter())
    }

    /// Interpolated diameter at `height_m` from the top, clamped to the
    /// endpoint values outside the measured span.
    pub fn diameter_at(&self, height_m: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if height_m <= first.height_m {
            return first.diameter_m;
        }
        if height_m >= last.height_m {
            return last.diameter_m;
        }
        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if height_m <= hi.height_m {
                let t = (height_m - lo.height_m) / (hi.height_m - lo.height_m);
                return lo.diameter_m + t * (hi.diameter_m - lo.diameter_m);
            }
        }
        last.diameter_m
    }

    /// Inverse lookup: height from the top at which the pole has the given
    /// diameter. Valid only inside the measured diameter range and only for
    /// a strictly increasing taper.
    pub fn height_from_diameter(&self, diameter_m: f64) -> AnalysisResult<f64> {
        if !self.strictly_tapered {
            return Err(AnalysisError::Configuration(
                "inverse lookup requires a strictly increasing taper".into(),
            ));
        }
        let (d_min, d_max) = (self.min_diameter(), self.max_diameter());
        if !(d_min..=d_max).contains(&diameter_m) {
            return Err(AnalysisError::InputRange(format!(
                "diameter {:.4} m outside measured range [{:.4} m, {:.4} m]",
                diameter_m, d_min, d_max
            )));
        }
        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if diameter_m <= hi.diameter_m {
                let t = (diameter_m - lo.diameter_m) / (hi.diameter_m - lo.diameter_m);
                return Ok(lo.height_m + t * (hi.height_m - lo.height_m));
            }
        }
        Ok(self.points[self.points.len() - 1].height_m)
    }

    /// Height lookup from a measured circumference: `d = C / pi`.
    pub fn height_from_circumference(&self, circumference_m: f64) -> AnalysisResult<f64> {
        self.height_from_diameter(circumference_m / PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_profile() -> GeometryProfile {
        GeometryProfile::new(vec![
            ControlPoint {
                height_m: 0.0,
                diameter_m: 0.170,
            },
            ControlPoint {
                height_m: 7.5,
                diameter_m: 0.210,
            },
            ControlPoint {
                height_m: 9.0,
                diameter_m: 0.249375,
            },
        ])
        .unwrap()
    }

    #[test]
    fn diameter_interpolates_between_control_points() {
        let profile = reference_profile();
        let mid = profile.diameter_at(3.75);
        assert!((mid - 0.190).abs() < 1e-12);
    }

    #[test]
    fn diameter_clamps_outside_measured_span() {
        let profile = reference_profile();
        assert_eq!(profile.diameter_at(-2.0), 0.170);
        assert_eq!(profile.diameter_at(50.0), 0.249375);
    }

    #[test]
    fn diameter_round_trips_through_inverse_lookup() {
        let profile = reference_profile();
        for &d in &[0.175, 0.190, 0.210, 0.230] {
            let h = profile.height_from_diameter(d).unwrap();
            assert!((profile.diameter_at(h) - d).abs() < 1e-9);
        }
    }

    #[test]
    fn inverse_lookup_rejects_diameters_outside_range() {
        let profile = reference_profile();
        assert!(matches!(
            profile.height_from_diameter(0.10),
            Err(AnalysisError::InputRange(_))
        ));
        assert!(matches!(
            profile.height_from_diameter(0.30),
            Err(AnalysisError::InputRange(_))
        ));
    }

    #[test]
    fn circumference_lookup_divides_by_pi() {
        let profile = reference_profile();
        let h_direct = profile.height_from_diameter(0.210).unwrap();
        let h_circ = profile.height_from_circumference(PI * 0.210).unwrap();
        assert!((h_direct - h_circ).abs() < 1e-9);
    }

    #[test]
    fn decreasing_diameters_are_rejected_at_construction() {
        let result = GeometryProfile::new(vec![
            ControlPoint {
                height_m: 0.0,
                diameter_m: 0.25,
            },
            ControlPoint {
                height_m: 9.0,
                diameter_m: 0.17,
            },
        ]);
        assert!(matches!(result, Err(AnalysisError::Configuration(_))));
    }

    #[test]
    fn constant_profile_supports_interpolation_but_not_inverse() {
        let profile = GeometryProfile::new(vec![
            ControlPoint {
                height_m: 0.0,
                diameter_m: 0.2,
            },
            ControlPoint {
                height_m: 9.0,
                diameter_m: 0.2,
            },
        ])
        .unwrap();
        assert_eq!(profile.diameter_at(4.5), 0.2);
        assert!(matches!(
            profile.height_from_diameter(0.2),
            Err(AnalysisError::Configuration(_))
        ));
    }
}
