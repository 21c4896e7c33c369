use crate::assessment::matcher::FrequencyComparison;
use crate::prelude::{AnalysisError, AnalysisResult, ThresholdConfig};
use serde::{Deserialize, Serialize};

/// Damage severity, ordered by escalating structural concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageLevel {
    Minor,
    Moderate,
    Severe,
    Unclassified,
}

impl DamageLevel {
    pub fn condition(&self) -> &'static str {
        match self {
            DamageLevel::Minor => "Minor deviation - likely environmental variation.",
            DamageLevel::Moderate => {
                "Moderate stiffness loss - possible internal decay or local cracking."
            }
            DamageLevel::Severe => "Severe stiffness loss - structural degradation likely.",
            DamageLevel::Unclassified => "Frequency deviation outside standard thresholds.",
        }
    }

    pub fn recommended_action(&self) -> &'static str {
        match self {
            DamageLevel::Minor => "No action needed; continue routine monitoring.",
            DamageLevel::Moderate => "Inspect the pole or support; plan preventive maintenance.",
            DamageLevel::Severe => "Immediate inspection and possible replacement required.",
            DamageLevel::Unclassified => "Review boundary conditions or sensor calibration.",
        }
    }
}

/// Severity verdict for one frequency comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageAssessment {
    pub level: DamageLevel,
    pub condition_summary: String,
    pub recommended_action: String,
    pub deviation_percent: f64,
}

/// Maps an absolute percentage deviation to a severity level.
///
/// Evaluation order is load-bearing: minor, moderate, severe, then the
/// unclassified gap between `moderate_max` and `severe_min`. The gap is a
/// legitimate outcome, not an error.
pub struct DamageClassifier {
    thresholds: ThresholdConfig,
}

impl DamageClassifier {
    pub fn new(thresholds: ThresholdConfig) -> AnalysisResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn classify(&self, comparison: &FrequencyComparison) -> AnalysisResult<DamageAssessment> {
        let deviation = comparison.deviation_percent;
        if deviation.is_nan() {
            return Err(AnalysisError::NotComputable(
                "deviation undefined; theoretical frequency was not computable".into(),
            ));
        }

        let magnitude = deviation.abs();
        let level = if magnitude <= self.thresholds.minor_max {
            DamageLevel::Minor
        } else if magnitude <= self.thresholds.moderate_max {
            DamageLevel::Moderate
        } else if magnitude >= self.thresholds.severe_min {
            DamageLevel::Severe
        } else {
            DamageLevel::Unclassified
        };

        Ok(DamageAssessment {
            level,
            condition_summary: level.condition().to_string(),
            recommended_action: level.recommended_action().to_string(),
            deviation_percent: deviation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(deviation: f64) -> DamageLevel {
        let classifier = DamageClassifier::new(ThresholdConfig::default()).unwrap();
        let comparison = FrequencyComparison {
            theoretical_hz: 100.0,
            measured_hz: 100.0 + deviation,
            deviation_percent: deviation,
        };
        classifier.classify(&comparison).unwrap().level
    }

    #[test]
    fn boundaries_follow_the_reference_thresholds() {
        assert_eq!(classify(5.0), DamageLevel::Minor);
        assert_eq!(classify(15.0), DamageLevel::Moderate);
        assert_eq!(classify(19.9), DamageLevel::Unclassified);
        assert_eq!(classify(20.0), DamageLevel::Severe);
    }

    #[test]
    fn classification_uses_the_absolute_deviation() {
        assert_eq!(classify(-4.0), DamageLevel::Minor);
        assert_eq!(classify(-12.0), DamageLevel::Moderate);
        assert_eq!(classify(-30.0), DamageLevel::Severe);
    }

    #[test]
    fn gap_between_moderate_and_severe_is_reachable() {
        assert_eq!(classify(17.5), DamageLevel::Unclassified);
    }

    #[test]
    fn nan_deviation_is_not_classifiable() {
        let classifier = DamageClassifier::new(ThresholdConfig::default()).unwrap();
        let comparison = FrequencyComparison {
            theoretical_hz: f64::NAN,
            measured_hz: 2.0,
            deviation_percent: f64::NAN,
        };
        assert!(matches!(
            classifier.classify(&comparison),
            Err(AnalysisError::NotComputable(_))
        ));
    }

    #[test]
    fn each_level_carries_its_narrative() {
        let assessment = DamageClassifier::new(ThresholdConfig::default())
            .unwrap()
            .classify(&FrequencyComparison {
                theoretical_hz: 2.0,
                measured_hz: 1.5,
                deviation_percent: -25.0,
            })
            .unwrap();
        assert_eq!(assessment.level, DamageLevel::Severe);
        assert!(assessment.recommended_action.contains("Immediate inspection"));
    }
}
