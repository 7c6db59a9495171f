//! Focus timer core.
//!
//! Provides the Pomodoro-style session state machine:
//! - Focus / break / long-break modes with fixed duration presets
//! - Automatic long break after four focus sessions
//! - A tick source decoupled from the wall clock
//! - MM:SS and progress formatting

pub mod session;
pub mod ticker;
pub mod timer;

pub use session::{
    Completion, DurationPreset, FocusDuration, Mode, Session, SoundCue, CYCLES_BEFORE_LONG_BREAK,
};
pub use ticker::{drive, Ticker};
pub use timer::{format_minutes, format_mmss, render_progress_bar};
