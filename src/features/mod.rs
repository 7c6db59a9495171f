//! Feature implementations for studytimer.
//!
//! - Focus sessions and the countdown state machine
//! - Sound effects, desktop notifications, and background music
//! - Accent themes
//! - Weekly focus statistics

pub mod effects;
pub mod focus;
pub mod music;
pub mod stats;
pub mod theme;
