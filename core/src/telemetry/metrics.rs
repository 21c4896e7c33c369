use crate::assessment::classifier::DamageLevel;
use std::sync::Mutex;

/// Run-level counters over completed and rejected assessments.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Default)]
struct Metrics {
    assessed: usize,
    rejected: usize,
    severe: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub assessed: usize,
    pub rejected: usize,
    pub severe: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_assessment(&self, level: DamageLevel) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.assessed += 1;
            if level == DamageLevel::Severe {
                metrics.severe += 1;
            }
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            MetricsSnapshot {
                assessed: metrics.assessed,
                rejected: metrics.rejected,
                severe: metrics.severe,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_per_outcome() {
        let recorder = MetricsRecorder::new();
        recorder.record_assessment(DamageLevel::Minor);
        recorder.record_assessment(DamageLevel::Severe);
        recorder.record_rejected();

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.assessed, 2);
        assert_eq!(snapshot.severe, 1);
        assert_eq!(snapshot.rejected, 1);
    }
}
