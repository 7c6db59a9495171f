//! Command-line interface for studytimer.

pub mod args;
pub mod commands;
