pub mod classifier;
pub mod matcher;
pub mod record;

pub use classifier::{DamageAssessment, DamageClassifier, DamageLevel};
pub use matcher::{FrequencyComparison, FrequencyMatcher};
pub use record::{AssessmentRecord, InputMode, MatchedFrequency};
