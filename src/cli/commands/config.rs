//! Config command implementation.

use std::path::Path;

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::StudyTimerError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or serialized.
pub fn config(
    current: &Config,
    path: &Path,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, StudyTimerError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(current),
            OutputFormat::Pretty => current.to_yaml(),
        },

        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            })),
            OutputFormat::Pretty => Ok(path.display().to_string()),
        },

        ConfigCommands::Init { force } => init_config(path, force, format),
    }
}

/// Write a default config file.
fn init_config(path: &Path, force: bool, format: OutputFormat) -> Result<String, StudyTimerError> {
    if path.exists() && !force {
        return Err(StudyTimerError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            StudyTimerError::Config(format!(
                "Failed to create directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    Config::default().save_to_path(path)?;
    tracing::info!(path = %path.display(), "wrote default config");

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "path": path.display().to_string(),
            "written": true,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Wrote default config to".green(),
            path.display()
        )),
    }
}
