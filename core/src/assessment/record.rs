use crate::assessment::classifier::DamageLevel;
use crate::assessment::matcher::FrequencyComparison;
use serde::{Deserialize, Serialize};

/// How the free length was derived for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    Circumference,
    Height,
}

/// One matched theoretical/measured frequency pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchedFrequency {
    pub theoretical_hz: f64,
    pub measured_hz: f64,
    pub deviation_percent: f64,
}

impl From<FrequencyComparison> for MatchedFrequency {
    fn from(comparison: FrequencyComparison) -> Self {
        Self {
            theoretical_hz: comparison.theoretical_hz,
            measured_hz: comparison.measured_hz,
            deviation_percent: comparison.deviation_percent,
        }
    }
}

/// Full serializable outcome of one assessment run, appended by the caller
/// to a persistent result log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub timestamp: String,
    pub input_mode: InputMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_circumference_m: Option<f64>,
    pub free_length_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_height_m: Option<f64>,
    pub sampling_hz: f64,
    pub peak_frequencies_hz: Vec<f64>,
    pub free: MatchedFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported: Option<MatchedFrequency>,
    pub damage_level: DamageLevel,
    pub condition_summary: String,
    pub recommended_action: String,
}
