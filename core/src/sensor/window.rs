use crate::prelude::{AnalysisError, AnalysisResult};
use crate::sensor::sample::TriaxialSample;
use crate::spectral::stats::StatsHelper;
use serde::{Deserialize, Serialize};

/// Accelerometer axis labels, in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "ax",
            Axis::Y => "ay",
            Axis::Z => "az",
        }
    }
}

/// One observation session of triaxial acceleration samples.
///
/// All supplied axes are truncated to the shortest common length at
/// construction; at least one axis and a positive sampling rate are
/// required.
#[derive(Debug, Clone)]
pub struct AccelerationWindow {
    axes: Vec<(Axis, Vec<f64>)>,
    sampling_hz: f64,
}

impl AccelerationWindow {
    pub fn new(
        ax: Option<Vec<f64>>,
        ay: Option<Vec<f64>>,
        az: Option<Vec<f64>>,
        sampling_hz: f64,
    ) -> AnalysisResult<Self> {
        if !sampling_hz.is_finite() || sampling_hz <= 0.0 {
            return Err(AnalysisError::InsufficientData(format!(
                "sampling frequency must be positive, got {sampling_hz}"
            )));
        }

        let mut axes: Vec<(Axis, Vec<f64>)> = Vec::new();
        for (axis, data) in [(Axis::X, ax), (Axis::Y, ay), (Axis::Z, az)] {
            if let Some(values) = data {
                axes.push((axis, values));
            }
        }
        if axes.is_empty() {
            return Err(AnalysisError::InsufficientData(
                "no acceleration axes supplied".into(),
            ));
        }

        let shortest = axes.iter().map(|(_, v)| v.len()).min().unwrap_or(0);
        for (_, values) in &mut axes {
            values.truncate(shortest);
        }

        Ok(Self { axes, sampling_hz })
    }

    /// Builds a window from timestamped samples, estimating the sampling
    /// rate as the reciprocal of the median timestamp interval. An axis is
    /// carried only when every sample reports it.
    pub fn from_samples(samples: &[TriaxialSample]) -> AnalysisResult<Self> {
        if samples.len() < 2 {
            return Err(AnalysisError::InsufficientData(
                "need at least two timestamped samples to estimate the sampling rate".into(),
            ));
        }
        let intervals: Vec<f64> = samples
            .windows(2)
            .map(|pair| pair[1].timestamp - pair[0].timestamp)
            .collect();
        let median_dt = StatsHelper::median(&intervals);
        if !median_dt.is_finite() || median_dt <= 0.0 {
            return Err(AnalysisError::InsufficientData(
                "timestamps are not increasing; cannot estimate a sampling rate".into(),
            ));
        }

        let collect_axis = |pick: fn(&TriaxialSample) -> Option<f64>| -> Option<Vec<f64>> {
            let values: Vec<f64> = samples.iter().filter_map(pick).collect();
            (values.len() == samples.len()).then_some(values)
        };

        Self::new(
            collect_axis(|s| s.ax),
            collect_axis(|s| s.ay),
            collect_axis(|s| s.az),
            1.0 / median_dt,
        )
    }

    pub fn sampling_hz(&self) -> f64 {
        self.sampling_hz
    }

    pub fn axes(&self) -> &[(Axis, Vec<f64>)] {
        &self.axes
    }

    /// Common sample count shared by every axis.
    pub fn len(&self) -> usize {
        self.axes.first().map(|(_, v)| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
