//! Focus session state machine.
//!
//! A [`Session`] holds the whole timer state: mode, focus duration preset,
//! remaining seconds, cycle count, and whether the countdown is running.
//! Every transition is a total function on this struct; side effects such as
//! sounds and alerts are reported back as a [`Completion`] for the caller to
//! dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StudyTimerError;
use crate::features::focus::timer::format_mmss;

/// Number of completed focus sessions that earns a long break.
pub const CYCLES_BEFORE_LONG_BREAK: u8 = 4;

/// Timer mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Active work interval
    #[default]
    Focus,
    /// Short rest after a focus session
    Break,
    /// Extended rest after four focus sessions
    LongBreak,
}

impl Mode {
    /// All modes, in display order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::Break, Self::LongBreak];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
            Self::LongBreak => "Long Break",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Mode {
    type Err = StudyTimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "focus" | "f" => Ok(Self::Focus),
            "break" | "short" | "short-break" | "b" => Ok(Self::Break),
            "long-break" | "longbreak" | "long" | "l" => Ok(Self::LongBreak),
            other => Err(StudyTimerError::InvalidInput(format!(
                "unknown mode '{other}' (expected focus, break, or long-break)"
            ))),
        }
    }
}

/// Break lengths and label tied to a focus duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationPreset {
    /// Focus interval in minutes
    pub focus_minutes: u32,
    /// Short break in minutes
    pub break_minutes: u32,
    /// Long break in minutes
    pub long_break_minutes: u32,
    /// Human-readable summary
    pub label: &'static str,
}

impl DurationPreset {
    /// Minutes for the given mode.
    #[must_use]
    pub const fn minutes_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_minutes,
            Mode::Break => self.break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Seconds for the given mode.
    #[must_use]
    pub const fn seconds_for(&self, mode: Mode) -> u32 {
        self.minutes_for(mode) * 60
    }
}

const PRESET_25: DurationPreset = DurationPreset {
    focus_minutes: 25,
    break_minutes: 5,
    long_break_minutes: 20,
    label: "Focus 25 minutes, then rest 5",
};

const PRESET_50: DurationPreset = DurationPreset {
    focus_minutes: 50,
    break_minutes: 10,
    long_break_minutes: 30,
    label: "Focus 50 minutes, then rest 10",
};

/// Selectable focus duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FocusDuration {
    /// 25 minute focus sessions
    #[default]
    Short,
    /// 50 minute focus sessions
    Long,
}

impl FocusDuration {
    /// All durations, in display order.
    pub const ALL: [Self; 2] = [Self::Short, Self::Long];

    /// Focus length in minutes.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.preset().focus_minutes
    }

    /// The preset table entry for this duration.
    #[must_use]
    pub const fn preset(&self) -> &'static DurationPreset {
        match self {
            Self::Short => &PRESET_25,
            Self::Long => &PRESET_50,
        }
    }
}

impl TryFrom<u32> for FocusDuration {
    type Error = StudyTimerError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            25 => Ok(Self::Short),
            50 => Ok(Self::Long),
            other => Err(StudyTimerError::InvalidInput(format!(
                "focus duration must be 25 or 50 minutes, got {other}"
            ))),
        }
    }
}

impl From<FocusDuration> for u32 {
    fn from(d: FocusDuration) -> Self {
        d.minutes()
    }
}

impl fmt::Display for FocusDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.minutes())
    }
}

/// Sound played when a mode expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    /// Digital bell, after a focus session
    Bell,
    /// Success chime, after a break
    Chime,
}

/// What happened when a countdown expired naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Completion {
    /// A focus session ended and a short break began.
    FocusComplete,
    /// The fourth focus session ended and a long break began.
    LongBreakEarned,
    /// A break ended and focus resumed.
    BreakOver,
}

impl Completion {
    /// Alert text shown to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::FocusComplete => "Focus complete, take a short break.",
            Self::LongBreakEarned => "4 focus sessions complete, take a long break.",
            Self::BreakOver => "Break over, resume focus.",
        }
    }

    /// Short title for alerts and notifications.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::FocusComplete => "Focus complete",
            Self::LongBreakEarned => "Long break",
            Self::BreakOver => "Back to focus",
        }
    }

    /// Sound to play for this completion.
    #[must_use]
    pub const fn cue(&self) -> SoundCue {
        match self {
            Self::FocusComplete | Self::LongBreakEarned => SoundCue::Bell,
            Self::BreakOver => SoundCue::Chime,
        }
    }
}

/// The timer state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    mode: Mode,
    focus_duration: FocusDuration,
    time_left_seconds: u32,
    cycle_count: u8,
    is_running: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FocusDuration::default())
    }
}

impl Session {
    /// Create a stopped focus session with a full countdown.
    #[must_use]
    pub const fn new(focus_duration: FocusDuration) -> Self {
        Self {
            mode: Mode::Focus,
            focus_duration,
            time_left_seconds: focus_duration.preset().seconds_for(Mode::Focus),
            cycle_count: 0,
            is_running: false,
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Current focus duration preset.
    #[must_use]
    pub const fn focus_duration(&self) -> FocusDuration {
        self.focus_duration
    }

    /// Seconds left in the current mode.
    #[must_use]
    pub const fn time_left_seconds(&self) -> u32 {
        self.time_left_seconds
    }

    /// Focus sessions completed since the last long break (0-3).
    #[must_use]
    pub const fn cycle_count(&self) -> u8 {
        self.cycle_count
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Full length of the current mode in seconds.
    #[must_use]
    pub const fn mode_duration_seconds(&self) -> u32 {
        self.focus_duration.preset().seconds_for(self.mode)
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the completion when the countdown expires. Expiry stops the
    /// timer and moves into the next mode.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.is_running {
            return None;
        }

        self.time_left_seconds = self.time_left_seconds.saturating_sub(1);

        if self.time_left_seconds == 0 {
            self.is_running = false;
            Some(self.advance())
        } else {
            None
        }
    }

    /// Start or pause the countdown.
    pub fn toggle_run(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Stop and restore the full duration of the current mode.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.time_left_seconds = self.mode_duration_seconds();
    }

    /// Manually switch mode. Elapsed progress is discarded; the cycle count
    /// is left alone.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    /// Change the focus duration. Starts over from a fresh focus session.
    pub fn set_focus_duration(&mut self, focus_duration: FocusDuration) {
        self.focus_duration = focus_duration;
        self.cycle_count = 0;
        self.switch_mode(Mode::Focus);
    }

    /// Mode that natural expiry of the current mode would enter.
    #[must_use]
    pub const fn next_mode(&self) -> Mode {
        match self.mode {
            Mode::Focus if self.cycle_count + 1 >= CYCLES_BEFORE_LONG_BREAK => Mode::LongBreak,
            Mode::Focus => Mode::Break,
            Mode::Break | Mode::LongBreak => Mode::Focus,
        }
    }

    /// Fraction of the current mode still remaining (1.0 - 0.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.mode_duration_seconds();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.time_left_seconds) / f64::from(total)
    }

    /// Remaining time as MM:SS.
    #[must_use]
    pub fn format_time(&self) -> String {
        format_mmss(self.time_left_seconds)
    }

    fn advance(&mut self) -> Completion {
        let next = self.next_mode();
        let completion = match (self.mode, next) {
            (Mode::Focus, Mode::LongBreak) => {
                self.cycle_count = 0;
                Completion::LongBreakEarned
            }
            (Mode::Focus, _) => {
                self.cycle_count += 1;
                Completion::FocusComplete
            }
            (Mode::LongBreak, _) => {
                self.cycle_count = 0;
                Completion::BreakOver
            }
            (Mode::Break, _) => Completion::BreakOver,
        };

        self.mode = next;
        self.time_left_seconds = self.mode_duration_seconds();
        completion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_expiry(session: &mut Session) -> Completion {
        if !session.is_running() {
            session.toggle_run();
        }
        loop {
            if let Some(completion) = session.tick() {
                return completion;
            }
        }
    }

    #[test]
    fn test_session_default() {
        let session = Session::default();
        assert_eq!(session.mode(), Mode::Focus);
        assert_eq!(session.focus_duration(), FocusDuration::Short);
        assert_eq!(session.time_left_seconds(), 1500);
        assert_eq!(session.cycle_count(), 0);
        assert!(!session.is_running());
    }

    #[test]
    fn test_preset_table() {
        let short = FocusDuration::Short.preset();
        assert_eq!(
            (short.focus_minutes, short.break_minutes, short.long_break_minutes),
            (25, 5, 20)
        );
        let long = FocusDuration::Long.preset();
        assert_eq!(
            (long.focus_minutes, long.break_minutes, long.long_break_minutes),
            (50, 10, 30)
        );
    }

    #[test]
    fn test_reset_restores_exact_duration() {
        for duration in FocusDuration::ALL {
            for mode in Mode::ALL {
                let mut session = Session::new(duration);
                session.switch_mode(mode);
                session.toggle_run();
                for _ in 0..30 {
                    session.tick();
                }
                session.reset();

                let expected = match (duration.minutes(), mode) {
                    (m, Mode::Focus) => m * 60,
                    (25, Mode::Break) => 300,
                    (25, Mode::LongBreak) => 1200,
                    (_, Mode::Break) => 600,
                    (_, Mode::LongBreak) => 1800,
                };
                assert_eq!(session.time_left_seconds(), expected, "{duration} {mode}");
                assert!(!session.is_running());
            }
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = Session::new(FocusDuration::Long);
        session.toggle_run();
        session.tick();
        session.tick();

        session.reset();
        let once = session.clone();
        session.reset();
        assert_eq!(session, once);
    }

    #[test]
    fn test_tick_only_when_running() {
        let mut session = Session::default();
        assert!(session.tick().is_none());
        assert_eq!(session.time_left_seconds(), 1500);

        session.toggle_run();
        assert!(session.tick().is_none());
        assert_eq!(session.time_left_seconds(), 1499);

        session.toggle_run();
        session.tick();
        assert_eq!(session.time_left_seconds(), 1499);
    }

    #[test]
    fn test_four_focus_cycles_earn_long_break() {
        let mut session = Session::new(FocusDuration::Short);

        for expected_cycle in 1..=3u8 {
            assert_eq!(run_to_expiry(&mut session), Completion::FocusComplete);
            assert_eq!(session.mode(), Mode::Break);
            assert_eq!(session.cycle_count(), expected_cycle);
            assert_eq!(session.time_left_seconds(), 300);
            assert!(!session.is_running());

            assert_eq!(run_to_expiry(&mut session), Completion::BreakOver);
            assert_eq!(session.mode(), Mode::Focus);
            assert_eq!(session.time_left_seconds(), 1500);
        }

        assert_eq!(run_to_expiry(&mut session), Completion::LongBreakEarned);
        assert_eq!(session.mode(), Mode::LongBreak);
        assert_eq!(session.time_left_seconds(), 1200);
        assert_eq!(session.cycle_count(), 0);
        assert!(!session.is_running());
    }

    #[test]
    fn test_fifty_minute_focus_expiry() {
        let mut session = Session::new(FocusDuration::Long);
        assert_eq!(run_to_expiry(&mut session), Completion::FocusComplete);
        assert_eq!(session.mode(), Mode::Break);
        assert_eq!(session.time_left_seconds(), 600);
        assert_eq!(session.cycle_count(), 1);
    }

    #[test]
    fn test_cycle_count_never_exceeds_three() {
        let mut session = Session::default();
        for _ in 0..20 {
            run_to_expiry(&mut session);
            assert!(session.cycle_count() < CYCLES_BEFORE_LONG_BREAK);
        }
    }

    #[test]
    fn test_long_break_completion_returns_to_focus() {
        let mut session = Session::default();
        for _ in 0..3 {
            run_to_expiry(&mut session);
            run_to_expiry(&mut session);
        }
        run_to_expiry(&mut session);
        assert_eq!(session.mode(), Mode::LongBreak);

        assert_eq!(run_to_expiry(&mut session), Completion::BreakOver);
        assert_eq!(session.mode(), Mode::Focus);
        assert_eq!(session.time_left_seconds(), 1500);
        assert_eq!(session.cycle_count(), 0);
    }

    #[test]
    fn test_manual_long_break_resets_cycles_on_completion() {
        let mut session = Session::default();
        run_to_expiry(&mut session);
        assert_eq!(session.cycle_count(), 1);

        session.switch_mode(Mode::LongBreak);
        assert_eq!(session.cycle_count(), 1);

        run_to_expiry(&mut session);
        assert_eq!(session.mode(), Mode::Focus);
        assert_eq!(session.cycle_count(), 0);
    }

    #[test]
    fn test_switch_mode_mid_countdown() {
        let mut session = Session::default();
        session.toggle_run();
        for _ in 0..90 {
            session.tick();
        }
        assert!(session.is_running());

        session.switch_mode(Mode::Break);
        assert!(!session.is_running());
        assert_eq!(session.mode(), Mode::Break);
        assert_eq!(session.time_left_seconds(), 300);
    }

    #[test]
    fn test_switch_mode_keeps_cycle_count() {
        let mut session = Session::default();
        run_to_expiry(&mut session);
        run_to_expiry(&mut session);
        assert_eq!(session.cycle_count(), 1);

        session.switch_mode(Mode::LongBreak);
        session.switch_mode(Mode::Focus);
        assert_eq!(session.cycle_count(), 1);
    }

    #[test]
    fn test_set_focus_duration_resets_everything() {
        let mut session = Session::default();
        run_to_expiry(&mut session);
        session.toggle_run();
        session.tick();

        session.set_focus_duration(FocusDuration::Long);
        assert_eq!(session.mode(), Mode::Focus);
        assert_eq!(session.cycle_count(), 0);
        assert!(!session.is_running());
        assert_eq!(session.time_left_seconds(), 3000);

        session.set_focus_duration(FocusDuration::Long);
        assert_eq!(session.time_left_seconds(), 3000);
    }

    #[test]
    fn test_next_mode() {
        let mut session = Session::default();
        assert_eq!(session.next_mode(), Mode::Break);

        for _ in 0..3 {
            run_to_expiry(&mut session);
            assert_eq!(session.next_mode(), Mode::Focus);
            run_to_expiry(&mut session);
        }
        assert_eq!(session.next_mode(), Mode::LongBreak);
    }

    #[test]
    fn test_progress_and_format() {
        let mut session = Session::new(FocusDuration::Short);
        assert!((session.progress() - 1.0).abs() < f64::EPSILON);
        assert_eq!(session.format_time(), "25:00");

        session.toggle_run();
        for _ in 0..750 {
            session.tick();
        }
        assert!((session.progress() - 0.5).abs() < 0.001);
        assert_eq!(session.format_time(), "12:30");
    }

    #[test]
    fn test_time_left_within_bounds() {
        let mut session = Session::default();
        session.toggle_run();
        for _ in 0..5000 {
            session.tick();
            assert!(session.time_left_seconds() <= session.mode_duration_seconds());
            if !session.is_running() {
                session.toggle_run();
            }
        }
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("focus".parse::<Mode>().unwrap(), Mode::Focus);
        assert_eq!("short".parse::<Mode>().unwrap(), Mode::Break);
        assert_eq!("Long-Break".parse::<Mode>().unwrap(), Mode::LongBreak);
        assert!("nap".parse::<Mode>().is_err());
    }

    #[test]
    fn test_focus_duration_try_from() {
        assert_eq!(FocusDuration::try_from(25).unwrap(), FocusDuration::Short);
        assert_eq!(FocusDuration::try_from(50).unwrap(), FocusDuration::Long);
        assert!(FocusDuration::try_from(30).is_err());
    }

    #[test]
    fn test_completion_cues() {
        assert_eq!(Completion::FocusComplete.cue(), SoundCue::Bell);
        assert_eq!(Completion::LongBreakEarned.cue(), SoundCue::Bell);
        assert_eq!(Completion::BreakOver.cue(), SoundCue::Chime);
    }
}
