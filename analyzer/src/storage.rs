use anyhow::Context;
use polecore::assessment::record::AssessmentRecord;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Appends one record to the JSON result log. A missing or corrupt file
/// starts a fresh list; a lone object is coerced into a list.
pub fn append_record<P: AsRef<Path>>(path: P, record: &AssessmentRecord) -> anyhow::Result<()> {
    let path_ref = path.as_ref();

    let mut entries: Vec<Value> = match fs::read_to_string(path_ref) {
        Ok(contents) => match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(list)) => list,
            Ok(other) => vec![other],
            Err(_) => Vec::new(),
        },
        Err(_) => Vec::new(),
    };
    entries.push(serde_json::to_value(record).context("serializing assessment record")?);

    if let Some(parent) = path_ref.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating results directory {}", parent.display()))?;
        }
    }
    let serialized =
        serde_json::to_string_pretty(&entries).context("serializing result log")?;
    fs::write(path_ref, serialized)
        .with_context(|| format!("writing result log {}", path_ref.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polecore::assessment::classifier::DamageLevel;
    use polecore::assessment::record::{InputMode, MatchedFrequency};
    use tempfile::NamedTempFile;

    fn sample_record() -> AssessmentRecord {
        AssessmentRecord {
            timestamp: "2026-08-23 10:00:00".to_string(),
            input_mode: InputMode::Height,
            ground_circumference_m: None,
            free_length_m: 7.5,
            support_height_m: None,
            sampling_hz: 128.0,
            peak_frequencies_hz: vec![2.03, 4.06, 1.97],
            free: MatchedFrequency {
                theoretical_hz: 2.02,
                measured_hz: 2.03,
                deviation_percent: 0.5,
            },
            supported: None,
            damage_level: DamageLevel::Minor,
            condition_summary: DamageLevel::Minor.condition().to_string(),
            recommended_action: DamageLevel::Minor.recommended_action().to_string(),
        }
    }

    #[test]
    fn records_accumulate_as_a_json_list() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.into_temp_path();

        append_record(&path, &sample_record()).unwrap();
        append_record(&path, &sample_record()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["damage_level"], "Minor");
    }

    #[test]
    fn corrupt_log_starts_over_instead_of_failing() {
        let temp = NamedTempFile::new().unwrap();
        fs::write(temp.path(), "not json at all").unwrap();

        append_record(temp.path(), &sample_record()).unwrap();
        let contents = fs::read_to_string(temp.path()).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
