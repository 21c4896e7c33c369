use crate::workflow::config::AnalyzerConfig;
use anyhow::Context;
use polecore::assessment::classifier::DamageClassifier;
use polecore::assessment::matcher::FrequencyMatcher;
use polecore::assessment::record::{AssessmentRecord, InputMode};
use polecore::model::BeamFrequencyModel;
use polecore::prelude::SupportConfig;
use polecore::sensor::window::AccelerationWindow;
use polecore::spectral::extractor::SpectralExtractor;
use polecore::telemetry::{MetricsRecorder, MetricsSnapshot};

/// Geometry input supplied by the operator.
#[derive(Debug, Clone, Copy)]
pub enum GeometryInput {
    /// Measured circumference at ground level [m].
    Circumference(f64),
    /// Free length above ground [m].
    FreeLength(f64),
}

/// Free length resolved from the operator's geometry input.
#[derive(Debug)]
pub struct ResolvedGeometry {
    pub free_length_m: f64,
    pub input_mode: InputMode,
    pub ground_circumference_m: Option<f64>,
}

/// Executes one assessment as an isolated unit of work: validate geometry,
/// extract spectral peaks, run the beam model, match, classify.
pub struct Runner {
    config: AnalyzerConfig,
    model: BeamFrequencyModel,
    extractor: SpectralExtractor,
    classifier: DamageClassifier,
    metrics: MetricsRecorder,
}

impl Runner {
    pub fn new(config: AnalyzerConfig) -> anyhow::Result<Self> {
        let material = config.material.to_properties();
        material
            .validate()
            .context("validating material configuration")?;
        let profile = config.to_profile()?;

        let mut model = BeamFrequencyModel::new(profile, material);
        if let Some(cable) = config.cable.to_cable() {
            cable.validate().context("validating cable configuration")?;
            model = model.with_cable(cable);
        }
        let classifier = DamageClassifier::new(config.thresholds)
            .context("validating threshold configuration")?;

        Ok(Self {
            config,
            model,
            extractor: SpectralExtractor::new(),
            classifier,
            metrics: MetricsRecorder::new(),
        })
    }

    pub fn model(&self) -> &BeamFrequencyModel {
        &self.model
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Validates the geometry input against the physical bounds and
    /// resolves the free length above ground.
    pub fn resolve_free_length(&self, input: GeometryInput) -> anyhow::Result<ResolvedGeometry> {
        match input {
            GeometryInput::Circumference(circumference) => {
                let (c_min, c_max) = self.model.profile().circumference_range();
                anyhow::ensure!(
                    (c_min..=c_max).contains(&circumference),
                    "circumference {:.3} m outside valid range [{:.3} m, {:.3} m]",
                    circumference,
                    c_min,
                    c_max
                );
                let free_length_m = self
                    .model
                    .profile()
                    .height_from_circumference(circumference)
                    .context("resolving height from circumference")?;
                Ok(ResolvedGeometry {
                    free_length_m,
                    input_mode: InputMode::Circumference,
                    ground_circumference_m: Some(circumference),
                })
            }
            GeometryInput::FreeLength(free_length_m) => {
                let bounds = &self.config.bounds;
                anyhow::ensure!(
                    (bounds.min_m..=bounds.max_m).contains(&free_length_m),
                    "free length {:.2} m outside plausible range [{:.1} m, {:.1} m]",
                    free_length_m,
                    bounds.min_m,
                    bounds.max_m
                );
                Ok(ResolvedGeometry {
                    free_length_m,
                    input_mode: InputMode::Height,
                    ground_circumference_m: None,
                })
            }
        }
    }

    pub fn execute(
        &self,
        input: GeometryInput,
        support: Option<SupportConfig>,
        window: &AccelerationWindow,
    ) -> anyhow::Result<AssessmentRecord> {
        let geometry = self.resolve_free_length(input).map_err(|err| {
            self.metrics.record_rejected();
            err
        })?;

        let extraction = match self.extractor.extract(window) {
            Ok(extraction) => extraction,
            Err(err) => {
                self.metrics.record_rejected();
                return Err(err).context("extracting spectral peaks");
            }
        };

        let f_free = self.model.free_frequency(geometry.free_length_m);
        if f_free.is_nan() {
            self.metrics.record_rejected();
            anyhow::bail!(
                "theoretical frequency not computable for free length {:.2} m",
                geometry.free_length_m
            );
        }

        let free_comparison = FrequencyMatcher::compare(f_free, &extraction.peaks);
        let supported_comparison = support.map(|support| {
            let f_supported = self
                .model
                .supported_frequency(geometry.free_length_m, support.height_m);
            FrequencyMatcher::compare(f_supported, &extraction.peaks)
        });

        // The braced side governs the verdict when a support is present.
        let governing = supported_comparison.unwrap_or(free_comparison);
        let assessment = self
            .classifier
            .classify(&governing)
            .context("classifying frequency deviation")?;
        self.metrics.record_assessment(assessment.level);

        Ok(AssessmentRecord {
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_mode: geometry.input_mode,
            ground_circumference_m: geometry.ground_circumference_m,
            free_length_m: geometry.free_length_m,
            support_height_m: support.map(|s| s.height_m),
            sampling_hz: window.sampling_hz(),
            peak_frequencies_hz: extraction.peaks.frequencies(),
            free: free_comparison.into(),
            supported: supported_comparison.map(Into::into),
            damage_level: assessment.level,
            condition_summary: assessment.condition_summary,
            recommended_action: assessment.recommended_action,
        })
    }
}
