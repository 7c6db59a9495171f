//! JSON output formatting for studytimer.

use serde::Serialize;
use serde_json::json;

use crate::error::StudyTimerError;
use crate::features::focus::{Completion, FocusDuration, Mode, Session};
use crate::features::stats::{DayActivity, WeeklySummary};

/// Format the duration preset table as JSON
///
/// # Errors
///
/// Returns `StudyTimerError::Parse` if JSON serialization fails.
pub fn format_presets_json(current: FocusDuration) -> Result<String, StudyTimerError> {
    let presets: Vec<_> = FocusDuration::ALL
        .iter()
        .map(|d| {
            json!({
                "focus_minutes": d.minutes(),
                "break_minutes": d.preset().break_minutes,
                "long_break_minutes": d.preset().long_break_minutes,
                "label": d.preset().label,
                "selected": *d == current,
            })
        })
        .collect();

    let output = json!({
        "count": presets.len(),
        "presets": presets,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the weekly chart data as JSON
///
/// # Errors
///
/// Returns `StudyTimerError::Parse` if JSON serialization fails.
pub fn format_week_json(
    days: &[DayActivity],
    summary: &WeeklySummary,
    today: usize,
) -> Result<String, StudyTimerError> {
    let output = json!({
        "days": days,
        "summary": summary,
        "today": days.get(today).map(|d| d.day),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the outcome of a headless run as JSON
///
/// # Errors
///
/// Returns `StudyTimerError::Parse` if JSON serialization fails.
pub fn format_run_json(
    completions: &[(Mode, Completion)],
    session: &Session,
) -> Result<String, StudyTimerError> {
    let events: Vec<_> = completions
        .iter()
        .map(|(finished, completion)| {
            json!({
                "finished": finished,
                "event": completion,
                "message": completion.message(),
            })
        })
        .collect();

    let output = json!({
        "completions": events,
        "session": session,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `StudyTimerError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StudyTimerError> {
    Ok(serde_json::to_string_pretty(value)?)
}
