//! Output formatting for studytimer.
//!
//! This module provides formatters for displaying timer data in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::StudyTimerError;
use crate::features::focus::FocusDuration;
use crate::features::stats::{DayActivity, WeeklySummary};

pub use json::*;
pub use pretty::*;

/// Format the duration presets based on output format
///
/// # Errors
///
/// Returns `StudyTimerError::Parse` if JSON serialization fails.
pub fn format_presets(current: FocusDuration, format: OutputFormat) -> Result<String, StudyTimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_presets_pretty(current)),
        OutputFormat::Json => format_presets_json(current),
    }
}

/// Format the weekly chart based on output format
///
/// # Errors
///
/// Returns `StudyTimerError::Parse` if JSON serialization fails.
pub fn format_week(
    days: &[DayActivity],
    today: usize,
    format: OutputFormat,
) -> Result<String, StudyTimerError> {
    let summary = WeeklySummary::from_days(days);
    match format {
        OutputFormat::Pretty => Ok(format_week_pretty(days, &summary, today)),
        OutputFormat::Json => format_week_json(days, &summary, today),
    }
}
