//! Text export of a finished session.
//!
//! Both formats are built in memory; writing them anywhere is the
//! caller's job.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use huesight_core::errors::StorageError;
use huesight_core::models::{AssessmentReport, ResponseRecord};

const CSV_HEADERS: &[&str] = &[
    "Round",
    "Reference Color",
    "Option 1",
    "Option 2",
    "User Choice",
    "Correct Choice",
    "Is Correct",
    "Difficulty Level",
    "Category",
    "Response Time (ms)",
    "Timestamp",
];

/// One row per response, then a session summary block.
pub fn to_csv(report: &AssessmentReport) -> String {
    let mut out = CSV_HEADERS.join(",");
    out.push('\n');

    for (i, record) in report.response_history.iter().enumerate() {
        let row = csv_row(i + 1, record);
        out.push_str(&row.iter().map(|f| csv_field(f)).collect::<Vec<_>>().join(","));
        out.push('\n');
    }

    let history = &report.response_history;
    let start = history.first().map(|r| r.timestamp);
    let end = history.last().map(|r| r.timestamp);

    out.push('\n');
    out.push_str("--- Session Summary ---\n");
    let _ = writeln!(out, "Total Questions,{}", report.total_questions);
    let _ = writeln!(out, "Correct Answers,{}", report.correct_answers());
    let _ = writeln!(out, "Accuracy,{:.1}%", report.accuracy * 100.0);
    let _ = writeln!(out, "Average Difficulty,{:.2}", report.average_difficulty);
    let _ = writeln!(out, "Average Response Time (ms),{:.0}", report.average_response_time_ms);
    let _ = writeln!(out, "Severity Estimate,{:.3}", report.severity_estimate);
    let _ = writeln!(out, "Severity,{}", report.severity_label);
    let _ = writeln!(out, "Confidence,{:.3}", report.confidence_level);
    let _ = writeln!(out, "Start Time,{}", start.map(|t| t.to_rfc3339()).unwrap_or_default());
    let _ = writeln!(out, "End Time,{}", end.map(|t| t.to_rfc3339()).unwrap_or_default());
    let _ = write!(out, "Total Duration,{}", session_duration(start, end));
    out
}

/// Pretty-printed JSON of the whole report.
pub fn to_json(report: &AssessmentReport) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn csv_row(round: usize, record: &ResponseRecord) -> Vec<String> {
    let stimulus = &record.stimulus;
    let correct = stimulus.correct_index();
    // Only correctness is recorded; with two options the choice follows.
    let chosen = if record.is_correct { correct } else { 1 - correct };
    vec![
        round.to_string(),
        stimulus.reference.to_string(),
        stimulus.options[0].to_string(),
        stimulus.options[1].to_string(),
        stimulus.options[chosen].to_string(),
        stimulus.options[correct].to_string(),
        if record.is_correct { "Yes" } else { "No" }.to_string(),
        stimulus.difficulty.value().to_string(),
        stimulus.category.clone(),
        record.response_time_ms().to_string(),
        record.timestamp.to_rfc3339(),
    ]
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// `"{m}m {s}s"` between first and last response, `"In progress"` if empty.
fn session_duration(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => {
            let secs = (end - start).num_seconds().max(0);
            format!("{}m {}s", secs / 60, secs % 60)
        }
        _ => "In progress".to_string(),
    }
}
