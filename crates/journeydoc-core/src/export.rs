//! File emitters for the sample datasets: whole-structure JSON dumps
//! (2-space indent, UTF-8, non-ASCII preserved) and flattened CSV tables.

use crate::error::Result;
use crate::samples::{self, JourneyStage, SessionType};
use serde::Serialize;
use std::io::Write as _;
use std::path::{Path, PathBuf};

pub const CONVERSATION_EXAMPLES_JSON: &str = "conversation_examples.json";
pub const INTERACTION_PATTERNS_JSON: &str = "user_interaction_patterns.json";
pub const ADVANCED_CAPABILITIES_JSON: &str = "advanced_capabilities.json";
pub const ASSISTANT_PROFILE_JSON: &str = "assistant_profile.json";
pub const SESSION_TYPES_CSV: &str = "session_types_analysis.csv";
pub const FEATURE_USAGE_CSV: &str = "feature_usage_metrics.csv";
pub const JOURNEY_STAGES_CSV: &str = "user_journey_analysis.csv";

/// Writes `value` as pretty-printed JSON (2-space indent) with a trailing
/// newline. Existing files are overwritten.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, value)?;
    file.write_all(b"\n")?;
    Ok(())
}

// CSV rows flatten list-valued fields into a single `; `-joined column so
// each source key still maps to exactly one header.
#[derive(Serialize)]
struct SessionTypeRow<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    percentage: u32,
    avg_duration_minutes: u32,
    features_used: String,
}

impl<'a> From<&'a SessionType> for SessionTypeRow<'a> {
    fn from(s: &'a SessionType) -> Self {
        Self {
            kind: &s.kind,
            percentage: s.percentage,
            avg_duration_minutes: s.avg_duration_minutes,
            features_used: s.features_used.join("; "),
        }
    }
}

#[derive(Serialize)]
struct JourneyStageRow<'a> {
    stage: &'a str,
    duration_days: &'a str,
    interactions: u32,
    questions: String,
}

impl<'a> From<&'a JourneyStage> for JourneyStageRow<'a> {
    fn from(s: &'a JourneyStage) -> Self {
        Self {
            stage: &s.stage,
            duration_days: &s.duration_days,
            interactions: s.interactions,
            questions: s.questions.join("; "),
        }
    }
}

fn write_csv<R: Serialize>(path: &Path, rows: impl IntoIterator<Item = R>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Emits every sample-data file into `dir` and returns the written paths in
/// emission order.
pub fn export_all(dir: &Path) -> Result<Vec<PathBuf>> {
    let conversations = samples::conversation_examples();
    let patterns = samples::interaction_patterns();
    let capabilities = samples::advanced_capabilities();
    let profile = samples::assistant_profile();

    let mut written = Vec::new();
    let mut emit = |name: &str| {
        let path = dir.join(name);
        written.push(path.clone());
        path
    };

    write_json_pretty(&emit(CONVERSATION_EXAMPLES_JSON), &conversations)?;
    write_json_pretty(&emit(INTERACTION_PATTERNS_JSON), &patterns)?;
    write_json_pretty(&emit(ADVANCED_CAPABILITIES_JSON), &capabilities)?;
    write_json_pretty(&emit(ASSISTANT_PROFILE_JSON), &profile)?;

    write_csv(
        &emit(SESSION_TYPES_CSV),
        patterns.session_types.iter().map(SessionTypeRow::from),
    )?;
    write_csv(&emit(FEATURE_USAGE_CSV), patterns.feature_usage.iter())?;
    write_csv(
        &emit(JOURNEY_STAGES_CSV),
        patterns.user_journey_stages.iter().map(JourneyStageRow::from),
    )?;

    tracing::info!(files = written.len(), dir = %dir.display(), "sample data exported");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{ConversationExamples, InteractionPatterns};

    #[test]
    fn export_all_writes_every_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let written = export_all(dir.path()).expect("export ok");
        assert_eq!(written.len(), 7);
        for path in &written {
            assert!(path.exists(), "missing: {}", path.display());
        }
    }

    #[test]
    fn json_round_trips_exactly() {
        let dir = tempfile::tempdir().expect("tempdir");
        export_all(dir.path()).expect("export ok");

        let text = std::fs::read_to_string(dir.path().join(CONVERSATION_EXAMPLES_JSON))
            .expect("read conversations");
        let parsed: ConversationExamples = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(parsed, samples::conversation_examples());
        // Non-ASCII must be written as literal UTF-8, not \u escapes.
        assert!(text.contains("¡Por supuesto!"));
        assert!(!text.contains("\\u00e9"));

        let text = std::fs::read_to_string(dir.path().join(INTERACTION_PATTERNS_JSON))
            .expect("read patterns");
        let parsed: InteractionPatterns = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(parsed, samples::interaction_patterns());
    }

    #[test]
    fn capability_json_preserves_key_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        export_all(dir.path()).expect("export ok");
        let text = std::fs::read_to_string(dir.path().join(ADVANCED_CAPABILITIES_JSON))
            .expect("read capabilities");
        let nlp = text.find("natural_language_processing").unwrap();
        let pers = text.find("personalization_features").unwrap();
        let integ = text.find("integration_capabilities").unwrap();
        assert!(nlp < pers && pers < integ);
    }

    #[test]
    fn json_uses_two_space_indent() {
        let dir = tempfile::tempdir().expect("tempdir");
        export_all(dir.path()).expect("export ok");
        let text = std::fs::read_to_string(dir.path().join(ADVANCED_CAPABILITIES_JSON))
            .expect("read capabilities");
        assert!(text.starts_with("{\n  \""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn csv_headers_and_row_counts_match_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        export_all(dir.path()).expect("export ok");
        let patterns = samples::interaction_patterns();

        let mut reader =
            csv::Reader::from_path(dir.path().join(SESSION_TYPES_CSV)).expect("open csv");
        let headers: Vec<String> = reader
            .headers()
            .expect("headers")
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(
            headers,
            ["type", "percentage", "avg_duration_minutes", "features_used"]
        );
        let rows: Vec<_> = reader.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(rows.len(), patterns.session_types.len());
        assert_eq!(&rows[0][0], "Information Seeking");
        assert_eq!(&rows[0][3], "text_chat; quick_actions; educational_content");

        let mut reader =
            csv::Reader::from_path(dir.path().join(FEATURE_USAGE_CSV)).expect("open csv");
        let headers: Vec<String> = reader
            .headers()
            .expect("headers")
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(headers, ["feature", "usage_rate", "satisfaction"]);
        assert_eq!(reader.records().count(), patterns.feature_usage.len());

        let mut reader =
            csv::Reader::from_path(dir.path().join(JOURNEY_STAGES_CSV)).expect("open csv");
        assert_eq!(reader.records().count(), patterns.user_journey_stages.len());
    }
}
