//! studytimer - A terminal focus timer
//!
//! This crate provides a Pomodoro-style timer with focus, break, and long
//! break modes, an interactive full-screen view, and a headless runner.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::StudyTimerError;
pub use features::focus::{Completion, FocusDuration, Mode, Session};
