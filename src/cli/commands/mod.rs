//! Command implementations for studytimer.
//!
//! This module contains the implementation of all non-interactive CLI
//! commands. The interactive timer lives in [`crate::tui`].

mod config;
mod info;
mod run;
mod sound;

pub use config::config;
pub use info::{presets, week};
pub use run::run;
pub use sound::sound;
