//! Color themes.
//!
//! The theme only sets the accent used for focus mode and chrome. Break and
//! long break keep their own colors so the mode is recognizable at a glance.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::StudyTimerError;
use crate::features::focus::Mode;

const BREAK_COLOR: Color = Color::Rgb(6, 182, 212);
const LONG_BREAK_COLOR: Color = Color::Rgb(245, 158, 11);

/// Accent theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Hot pink
    #[default]
    Pink,
    /// Emerald green
    Emerald,
    /// Indigo blue
    Indigo,
}

impl Theme {
    /// All themes, in selector order.
    pub const ALL: [Self; 3] = [Self::Pink, Self::Emerald, Self::Indigo];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Pink => "Pink",
            Self::Emerald => "Emerald",
            Self::Indigo => "Indigo",
        }
    }

    /// Accent color.
    #[must_use]
    pub const fn accent(&self) -> Color {
        match self {
            Self::Pink => Color::Rgb(255, 105, 180),
            Self::Emerald => Color::Rgb(16, 185, 129),
            Self::Indigo => Color::Rgb(99, 102, 241),
        }
    }

    /// Color for the countdown in the given mode.
    #[must_use]
    pub const fn mode_color(&self, mode: Mode) -> Color {
        match mode {
            Mode::Focus => self.accent(),
            Mode::Break => BREAK_COLOR,
            Mode::LongBreak => LONG_BREAK_COLOR,
        }
    }

    /// The theme after this one, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Pink => Self::Emerald,
            Self::Emerald => Self::Indigo,
            Self::Indigo => Self::Pink,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Theme {
    type Err = StudyTimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pink" => Ok(Self::Pink),
            "emerald" => Ok(Self::Emerald),
            "indigo" => Ok(Self::Indigo),
            other => Err(StudyTimerError::InvalidInput(format!(
                "unknown theme '{other}' (expected pink, emerald, or indigo)"
            ))),
        }
    }
}
