use anyhow::{Context, Result};

use crate::models::screening::ScreeningResult;

/// Download name for exported results.
pub const CSV_FILE_NAME: &str = "resume_screening_results.csv";

/// Prepended to downloads so spreadsheet tools detect UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

const HEADER: [&str; 5] = [
    "Name",
    "Matched Skills",
    "Semantic Similarity",
    "Skill Match",
    "Final Score",
];

/// Serialises results to CSV in the order given. Fields that contain commas,
/// quotes or newlines are quoted.
pub fn to_csv<'a, I>(results: I) -> Result<String>
where
    I: IntoIterator<Item = &'a ScreeningResult>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for result in results {
        writer.write_record([
            result.name.clone(),
            result.matched_skills.join(", "),
            format_percent(result.semantic_similarity),
            format_percent(result.skill_match_ratio),
            result.final_score.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// `0.833` → `83.3%`
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
