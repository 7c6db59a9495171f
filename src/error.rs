//! Error types for studytimer.
//!
//! The timer state machine itself never fails; these errors cover the
//! ambient edges: configuration files, terminal setup, and user input.

use thiserror::Error;

/// Errors that can occur while running studytimer.
#[derive(Debug, Error)]
pub enum StudyTimerError {
    /// Configuration could not be loaded, saved, or resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value supplied by the user is outside the allowed set.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The terminal could not be set up, drawn, or restored.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The external media player could not be started or controlled.
    #[error("Playback error: {0}")]
    Playback(String),

    /// A desktop notification could not be delivered.
    #[error("Notification error: {0}")]
    Notification(String),
}

impl From<serde_json::Error> for StudyTimerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for StudyTimerError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
