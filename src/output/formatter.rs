use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::grading::{
    percentage_of, round_to_tenth, CalculationInput, GradeResult, Label, ScoringMode,
};
use crate::history::HistoryRecord;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Color a label green-to-red by desirability.
fn colored_label(label: Label) -> String {
    match label {
        Label::Excellent => label.green().to_string(),
        Label::Good => label.cyan().to_string(),
        Label::Satisfactory | Label::Sufficient => label.yellow().to_string(),
        Label::Poor | Label::Insufficient => label.red().to_string(),
    }
}

/// Format a computed grade as a short human-readable summary.
/// Format: "Grade: {value} ({label})", plus a percentage line when a
/// maximum is known.
pub fn format_result(
    points: u32,
    max_points: Option<u32>,
    result: &GradeResult,
    use_colors: bool,
) -> String {
    let grade = format!("{:.1}", result.display_value());
    let mut out = if use_colors {
        format!("Grade: {} ({})", grade.bold(), colored_label(result.label))
    } else {
        format!("Grade: {} ({})", grade, result.label)
    };
    if let Some(max) = max_points {
        if let Some(pct) = percentage_of(points, max) {
            out.push_str(&format!("\n{} of {} points ({:.1}%)", points, max, pct));
        }
    }
    out
}

/// Format history records as one line per record.
/// Format: "{index}. {grade} {label} | {points}/{max} {mode} | {timestamp}"
///
/// Callers pass the records in the order they want them shown; the session
/// passes most-recent-first with 1-based indices that its `remove` accepts.
pub fn format_history(records: &[&HistoryRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No calculations yet.".to_string();
    }

    records
        .iter()
        .enumerate()
        .map(|(idx, record)| format_history_line(idx + 1, record, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_history_line(index: usize, record: &HistoryRecord, use_colors: bool) -> String {
    let grade = format!("{:.1}", round_to_tenth(record.grade));
    // Plain IHK is always out of 100.
    let score = match record.max_points {
        Some(max) => format!("{}/{}", record.points, max),
        None => format!("{}/100", record.points),
    };
    let timestamp = record.created_at.format("%Y-%m-%d %H:%M");

    if use_colors {
        format!(
            "{:>3}. {} {} | {} {} | {}",
            index,
            grade.bold(),
            colored_label(record.label),
            score,
            record.mode,
            timestamp
        )
    } else {
        format!(
            "{:>3}. {} {} | {} {} | {}",
            index, grade, record.label, score, record.mode, timestamp
        )
    }
}

#[derive(Serialize)]
struct ResultPayload {
    mode: ScoringMode,
    points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_points: Option<u32>,
    grade: f64,
    label: Label,
}

/// Machine-readable result for `--json`.
pub fn result_json(input: &CalculationInput, result: &GradeResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ResultPayload {
        mode: input.mode,
        points: input.points,
        max_points: input.max_points,
        grade: result.value,
        label: result.label,
    })
}
