use serde::{Deserialize, Serialize};

/// Wire form of one accelerometer reading, as returned by the sensor
/// endpoint and stored in the CSV log. Axis fields may be absent when a
/// sensor channel is not wired.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TriaxialSample {
    /// Seconds since the epoch.
    pub timestamp: f64,
    #[serde(default)]
    pub ax: Option<f64>,
    #[serde(default)]
    pub ay: Option<f64>,
    #[serde(default)]
    pub az: Option<f64>,
}
