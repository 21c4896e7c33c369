use anyhow::Context;
use polecore::geometry::{ControlPoint, GeometryProfile};
use polecore::prelude::{CableConfig, MaterialProperties, ThresholdConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Material section of the analyzer configuration. The modulus is entered
/// in GPa and converted to Pa for the core.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSection {
    pub e_gpa: f64,
    pub density: f64,
    pub species: String,
    pub model: String,
    pub assumptions: String,
}

impl Default for MaterialSection {
    fn default() -> Self {
        Self {
            e_gpa: 11.0,
            density: 600.0,
            species: "Pine Wood".to_string(),
            model: "Euler-Bernoulli Cantilever Beam (Fixed at Ground)".to_string(),
            assumptions: "Uniform material and small vibration amplitude.".to_string(),
        }
    }
}

impl MaterialSection {
    pub fn to_properties(&self) -> MaterialProperties {
        MaterialProperties {
            young_modulus_pa: self.e_gpa * 1e9,
            density_kg_m3: self.density,
            species: self.species.clone(),
            model: self.model.clone(),
            assumptions: self.assumptions.clone(),
        }
    }
}

/// Cable section; zero linear mass or length means no cable coupling.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CableSection {
    #[serde(rename = "type")]
    pub kind: String,
    pub linear_mass: f64,
    pub effective_length: f64,
    pub attachment_offset: f64,
}

impl Default for CableSection {
    fn default() -> Self {
        Self {
            kind: "messenger".to_string(),
            linear_mass: 0.0,
            effective_length: 0.0,
            attachment_offset: 0.0,
        }
    }
}

impl CableSection {
    pub fn to_cable(&self) -> Option<CableConfig> {
        let cable = CableConfig {
            linear_mass: self.linear_mass,
            effective_length: self.effective_length,
            attachment_offset: self.attachment_offset,
        };
        (cable.total_mass() != 0.0).then_some(cable)
    }
}

/// Plausible range for a directly supplied free length [m].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthBounds {
    pub min_m: f64,
    pub max_m: f64,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min_m: 0.5,
            max_m: 9.0,
        }
    }
}

/// External data locations used by the driver.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSource {
    pub sensor_csv: String,
    pub results_json: String,
    pub api_url: String,
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            sensor_csv: "data/sensor_data.csv".to_string(),
            results_json: "outputs/results.json".to_string(),
            api_url: "http://localhost:8000/sensor/".to_string(),
        }
    }
}

/// Whole-run configuration for the analyzer driver. Every section has a
/// default matching the reference pole, so a partial YAML file is enough.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub material: MaterialSection,
    pub cable: CableSection,
    pub geometry: Vec<ControlPoint>,
    pub thresholds: ThresholdConfig,
    pub bounds: LengthBounds,
    pub data_source: DataSource,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            material: MaterialSection::default(),
            cable: CableSection::default(),
            geometry: vec![
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
            ],
            thresholds: ThresholdConfig::default(),
            bounds: LengthBounds::default(),
            data_source: DataSource::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading analyzer config {}", path_ref.display()))?;
        let config: AnalyzerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing analyzer config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn to_profile(&self) -> anyhow::Result<GeometryProfile> {
        let profile = GeometryProfile::new(self.geometry.clone())
            .context("building geometry profile from configuration")?;
        Ok(profile)
    }
}
