use serde::{Deserialize, Serialize};

/// Material assumptions for the pole, loaded once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialProperties {
    pub young_modulus_pa: f64,
    pub density_kg_m3: f64,
    pub species: String,
    pub model: String,
    pub assumptions: String,
}

impl MaterialProperties {
    pub fn validate(&self) -> AnalysisResult<()> {
        if !self.young_modulus_pa.is_finite() || self.young_modulus_pa <= 0.0 {
            return Err(AnalysisError::Configuration(
                "Young's modulus must be a positive finite value".into(),
            ));
        }
        if !self.density_kg_m3.is_finite() || self.density_kg_m3 <= 0.0 {
            return Err(AnalysisError::Configuration(
                "density must be a positive finite value".into(),
            ));
        }
        Ok(())
    }
}

/// Attached cable (messenger) parameters. Zero total mass means no coupling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CableConfig {
    /// Linear mass of the cable [kg/m].
    pub linear_mass: f64,
    /// Length of cable effectively coupled to the pole [m].
    pub effective_length: f64,
    /// Attachment point, measured down from the pole tip [m].
    pub attachment_offset: f64,
}

impl CableConfig {
    pub fn total_mass(&self) -> f64 {
        self.linear_mass * self.effective_length
    }

    pub fn validate(&self) -> AnalysisResult<()> {
        if self.linear_mass < 0.0 || self.effective_length < 0.0 || self.attachment_offset < 0.0 {
            return Err(AnalysisError::Configuration(
                "cable parameters must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

/// Lateral support (guy) attachment, present only for braced poles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SupportConfig {
    /// Attachment height above ground [m].
    pub height_m: f64,
}

/// Percentage bounds applied to the absolute frequency deviation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub minor_max: f64,
    pub moderate_max: f64,
    pub severe_min: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            minor_max: 5.0,
            moderate_max: 15.0,
            severe_min: 20.0,
        }
    }
}

impl ThresholdConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        let all_finite = self.minor_max.is_finite()
            && self.moderate_max.is_finite()
            && self.severe_min.is_finite();
        if !all_finite || self.minor_max < 0.0 {
            return Err(AnalysisError::Configuration(
                "thresholds must be finite and non-negative".into(),
            ));
        }
        if self.minor_max > self.moderate_max {
            return Err(AnalysisError::Configuration(
                "minor_max must not exceed moderate_max".into(),
            ));
        }
        Ok(())
    }
}

/// Common error type for the assessment pipeline.
#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("input out of range: {0}")]
    InputRange(String),
    #[error("insufficient data: {0}")]
    InsufficientData(String),
    #[error("not computable: {0}")]
    NotComputable(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
