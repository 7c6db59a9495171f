//! Sound command implementation.

use colored::Colorize;

use crate::cli::args::{OutputFormat, SoundCommands};
use crate::config::Config;
use crate::error::StudyTimerError;
use crate::features::effects::Effects;
use crate::features::focus::SoundCue;
use crate::output::to_json;

/// Execute sound subcommands.
///
/// # Errors
///
/// Returns an error if JSON serialization fails. Playback failures are
/// logged, not returned.
pub fn sound(
    config: &Config,
    cmd: SoundCommands,
    format: OutputFormat,
) -> Result<String, StudyTimerError> {
    match cmd {
        SoundCommands::Test { chime } => {
            let cue = if chime { SoundCue::Chime } else { SoundCue::Bell };
            let mut effects = Effects::from_config(config, false);
            effects.play_cue(cue);

            match format {
                OutputFormat::Json => to_json(&serde_json::json!({ "played": cue })),
                OutputFormat::Pretty => Ok(format!(
                    "🔔 Playing {} with {}",
                    if chime { "break chime" } else { "focus bell" },
                    config.audio.player_command.bold()
                )),
            }
        }
    }
}
