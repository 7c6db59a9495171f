//! Read-only informational commands.

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::StudyTimerError;
use crate::features::stats::{today_index, weekly_activity};
use crate::output::{format_presets, format_week};

/// Show the duration preset table, marking the configured one.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn presets(config: &Config, format: OutputFormat) -> Result<String, StudyTimerError> {
    format_presets(config.timer.focus_minutes, format)
}

/// Show the weekly focus chart.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn week(format: OutputFormat) -> Result<String, StudyTimerError> {
    format_week(weekly_activity(), today_index(), format)
}
