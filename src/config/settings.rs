//! Configuration settings for studytimer.
//!
//! Settings are loaded from `~/.studytimer/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::StudyTimerError;
use crate::features::focus::FocusDuration;
use crate::features::theme::Theme;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
    /// Look and feel.
    pub appearance: AppearanceConfig,
    /// Sound effects and background music.
    pub audio: AudioConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus duration at startup (25 or 50).
    pub focus_minutes: FocusDuration,
    /// Show a desktop notification when a countdown expires.
    #[serde(default = "default_true")]
    pub desktop_notifications: bool,
}

/// Appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Accent theme at startup.
    pub theme: Theme,
}

/// Audio settings.
///
/// Playback is delegated to an external player command which receives the
/// URL as its last argument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Play a sound when a countdown expires.
    #[serde(default = "default_true")]
    pub sound_effects: bool,
    /// Background music volume (0.0 - 1.0).
    #[serde(default = "default_volume")]
    pub volume: f64,
    /// Background music stream.
    #[serde(default = "default_music_url")]
    pub music_url: String,
    /// Clip played when a focus session ends.
    #[serde(default = "default_focus_bell_url")]
    pub focus_bell_url: String,
    /// Clip played when a break ends.
    #[serde(default = "default_break_chime_url")]
    pub break_chime_url: String,
    /// Player executable.
    #[serde(default = "default_player_command")]
    pub player_command: String,
    /// Extra arguments passed before the URL.
    #[serde(default = "default_player_args")]
    pub player_args: Vec<String>,
    /// Volume argument template; `{percent}` is replaced with 0-100.
    #[serde(default = "default_volume_arg")]
    pub volume_arg: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

const fn default_volume() -> f64 {
    0.3
}

fn default_music_url() -> String {
    "https://stream.zeno.fm/0r0xa792kwzuv".to_string()
}

fn default_focus_bell_url() -> String {
    "https://assets.mixkit.co/active_storage/sfx/2869/2869-preview.mp3".to_string()
}

fn default_break_chime_url() -> String {
    "https://assets.mixkit.co/active_storage/sfx/1084/1084-preview.mp3".to_string()
}

fn default_player_command() -> String {
    "mpv".to_string()
}

fn default_player_args() -> Vec<String> {
    vec!["--no-video".to_string(), "--really-quiet".to_string()]
}

fn default_volume_arg() -> String {
    "--volume={percent}".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: FocusDuration::default(),
            desktop_notifications: default_true(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sound_effects: default_true(),
            volume: default_volume(),
            music_url: default_music_url(),
            focus_bell_url: default_focus_bell_url(),
            break_chime_url: default_break_chime_url(),
            player_command: default_player_command(),
            player_args: default_player_args(),
            volume_arg: default_volume_arg(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds out-of-range values.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, StudyTimerError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            StudyTimerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            StudyTimerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that the type system does not constrain.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume is outside 0.0 - 1.0 or no player
    /// command is set.
    pub fn validate(&self) -> Result<(), StudyTimerError> {
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(StudyTimerError::Config(format!(
                "audio.volume must be between 0.0 and 1.0, got {}",
                self.audio.volume
            )));
        }

        if self.audio.player_command.trim().is_empty() {
            return Err(StudyTimerError::Config(
                "audio.player_command must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), StudyTimerError> {
        let contents = self.to_yaml()?;

        std::fs::write(path, contents).map_err(|e| {
            StudyTimerError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, StudyTimerError> {
        serde_yaml::to_string(self)
            .map_err(|e| StudyTimerError::Config(format!("Failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.timer.focus_minutes, FocusDuration::Short);
        assert!(config.timer.desktop_notifications);
        assert_eq!(config.appearance.theme, Theme::Pink);
        assert!((config.audio.volume - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.audio.player_command, "mpv");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.focus_minutes = FocusDuration::Long;
        config.appearance.theme = Theme::Indigo;
        config.audio.volume = 0.75;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
timer:
  focus_minutes: 50
appearance:
  theme: emerald
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.timer.focus_minutes, FocusDuration::Long);
        assert_eq!(config.appearance.theme, Theme::Emerald);
        // Defaults should be used for missing fields
        assert!(config.timer.desktop_notifications);
        assert!(config.audio.sound_effects);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_invalid_focus_minutes_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer:\n  focus_minutes: 30\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, StudyTimerError::Config(_)));
    }

    #[test]
    fn test_out_of_range_volume_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "audio:\n  volume: 1.5\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("audio.volume"));
    }
}
