//! Once-per-second tick source for a [`Session`].
//!
//! The session never reads the clock. Whoever owns the event loop keeps a
//! [`Ticker`] and calls [`drive`] each time it wakes up; the ticker turns the
//! wall-clock time since the last tick into a whole number of ticks.

use std::time::{Duration, Instant};

use crate::features::focus::session::{Completion, Session};

/// Converts elapsed wall-clock time into discrete ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Ticker {
    /// Create a disarmed ticker with the given interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            last: None,
        }
    }

    /// Start counting from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.last = Some(now);
    }

    /// Stop counting. Time passed while disarmed never produces ticks.
    pub fn disarm(&mut self) {
        self.last = None;
    }

    /// Whether the ticker is counting.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.last.is_some()
    }

    /// Arm or disarm to follow the session's running flag.
    pub fn sync(&mut self, running: bool, now: Instant) {
        match (running, self.is_armed()) {
            (true, false) => self.arm(now),
            (false, true) => self.disarm(),
            _ => {}
        }
    }

    /// Number of whole intervals elapsed since the last tick.
    ///
    /// The fractional remainder carries over to the next call.
    #[allow(clippy::cast_possible_truncation)]
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last else {
            return 0;
        };

        let elapsed = now.saturating_duration_since(last);
        let count = (elapsed.as_nanos() / self.interval.as_nanos()).min(u128::from(u32::MAX)) as u32;
        if count > 0 {
            self.last = Some(last + self.interval * count);
        }
        count
    }

    /// Time until the next tick is due, if armed.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.last
            .map(|last| (last + self.interval).saturating_duration_since(now))
    }
}

/// Apply all ticks due at `now` to the session.
///
/// Stops at the first completion: expiry pauses the session, so any
/// remaining due ticks are dropped along with the ticker's arm state.
pub fn drive(session: &mut Session, ticker: &mut Ticker, now: Instant) -> Option<Completion> {
    ticker.sync(session.is_running(), now);

    for _ in 0..ticker.due(now) {
        if let Some(completion) = session.tick() {
            ticker.disarm();
            return Some(completion);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::session::{FocusDuration, Mode};

    #[test]
    fn test_disarmed_ticker_never_ticks() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        assert_eq!(ticker.due(start + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_due_counts_whole_seconds() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);

        assert_eq!(ticker.due(start + Duration::from_millis(900)), 0);
        assert_eq!(ticker.due(start + Duration::from_millis(2500)), 2);
        // Remainder of 500ms carries over.
        assert_eq!(ticker.due(start + Duration::from_millis(3000)), 1);
    }

    #[test]
    fn test_until_next() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        assert!(ticker.until_next(start).is_none());

        ticker.arm(start);
        assert_eq!(
            ticker.until_next(start + Duration::from_millis(400)),
            Some(Duration::from_millis(600))
        );
    }

    #[test]
    fn test_drive_applies_elapsed_seconds() {
        let mut session = Session::default();
        let mut ticker = Ticker::default();
        let start = Instant::now();

        session.toggle_run();
        assert!(drive(&mut session, &mut ticker, start).is_none());
        assert!(drive(&mut session, &mut ticker, start + Duration::from_secs(5)).is_none());
        assert_eq!(session.time_left_seconds(), 1495);
    }

    #[test]
    fn test_paused_time_does_not_count() {
        let mut session = Session::default();
        let mut ticker = Ticker::default();
        let start = Instant::now();

        session.toggle_run();
        drive(&mut session, &mut ticker, start);
        drive(&mut session, &mut ticker, start + Duration::from_secs(3));

        session.toggle_run();
        drive(&mut session, &mut ticker, start + Duration::from_secs(4));
        assert!(!ticker.is_armed());

        session.toggle_run();
        drive(&mut session, &mut ticker, start + Duration::from_secs(60));
        drive(&mut session, &mut ticker, start + Duration::from_secs(62));

        assert_eq!(session.time_left_seconds(), 1500 - 5);
    }

    #[test]
    fn test_drive_stops_at_expiry() {
        let mut session = Session::new(FocusDuration::Short);
        session.switch_mode(Mode::Break);
        let mut ticker = Ticker::default();
        let start = Instant::now();

        session.toggle_run();
        drive(&mut session, &mut ticker, start);
        let completion = drive(&mut session, &mut ticker, start + Duration::from_secs(1000));

        assert_eq!(completion, Some(Completion::BreakOver));
        assert_eq!(session.mode(), Mode::Focus);
        assert_eq!(session.time_left_seconds(), 1500);
        assert!(!session.is_running());
        assert!(!ticker.is_armed());
    }
}
