//! Configuration management for studytimer.
//!
//! This module handles loading and saving configuration from `~/.studytimer/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{AppearanceConfig, AudioConfig, ColorSetting, Config, GeneralConfig, TimerConfig};
