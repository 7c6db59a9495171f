//! Application state for the TUI.

use std::time::Instant;

use crate::config::Config;
use crate::features::effects::Effects;
use crate::features::focus::{drive, Completion, FocusDuration, Mode, Session, SoundCue, Ticker};
use crate::features::music::{Music, VOLUME_STEP};
use crate::features::theme::Theme;

/// Application state.
pub struct App {
    /// The timer state machine.
    pub session: Session,
    /// Tick source for the session.
    ticker: Ticker,
    /// Accent theme.
    pub theme: Theme,
    /// Background music state.
    pub music: Music,
    /// Sound and notification capabilities.
    effects: Effects,
    /// Alert waiting to be dismissed.
    pub alert: Option<Completion>,
    /// Whether the help overlay is open.
    pub show_help: bool,
    /// Status message to display.
    pub status: Option<String>,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(config: &Config, focus_duration: FocusDuration, theme: Theme, effects: Effects) -> Self {
        Self {
            session: Session::new(focus_duration),
            ticker: Ticker::default(),
            theme,
            music: Music::new(config.audio.volume),
            effects,
            alert: None,
            show_help: false,
            status: Some("Press ? for help".to_string()),
        }
    }

    /// Advance the countdown to `now`. Expiry raises an alert.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(completion) = drive(&mut self.session, &mut self.ticker, now) {
            self.effects.announce(completion);
            self.alert = Some(completion);
        }
    }

    /// Start or pause.
    pub fn toggle_run(&mut self) {
        self.session.toggle_run();
        self.status = Some(if self.session.is_running() { "Started" } else { "Paused" }.to_string());
    }

    /// Reset the current mode.
    pub fn reset(&mut self) {
        self.session.reset();
        self.status = Some(format!("{} reset", self.session.mode()));
    }

    /// Switch to another mode.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.session.switch_mode(mode);
        self.status = Some(format!("Switched to {mode}"));
    }

    /// Change the focus duration preset.
    pub fn set_focus_duration(&mut self, duration: FocusDuration) {
        self.session.set_focus_duration(duration);
        self.status = Some(duration.preset().label.to_string());
    }

    /// Move to the next theme.
    pub fn next_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = Some(format!("Theme: {}", self.theme));
    }

    /// Switch background music on or off.
    pub fn toggle_music(&mut self) {
        self.music.toggle(&mut self.effects);
        self.status = Some(if self.music.is_playing() { "Music on" } else { "Music off" }.to_string());
    }

    /// Raise or lower the music volume by one step.
    pub fn adjust_volume(&mut self, up: bool) {
        let delta = if up { VOLUME_STEP } else { -VOLUME_STEP };
        self.music.adjust_volume(delta, &mut self.effects);
        self.status = Some(format!("Volume {:.0}%", self.music.volume() * 100.0));
    }

    /// Play the focus bell once.
    pub fn test_sound(&mut self) {
        self.effects.play_cue(SoundCue::Bell);
        self.status = Some("Testing alarm sound".to_string());
    }

    /// Close the alert popup.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.status = None;
    }

    /// Open or close the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Stop music before exiting.
    pub fn shutdown(&mut self) {
        self.music.stop(&mut self.effects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::effects::{NullNotifier, SilentPlayer};
    use std::time::Duration;

    fn app() -> App {
        let config = Config::default();
        let effects =
            Effects::with_capabilities(&config, Box::new(SilentPlayer), Box::new(NullNotifier));
        App::new(&config, FocusDuration::Short, Theme::Pink, effects)
    }

    #[test]
    fn test_expiry_raises_alert() {
        let mut app = app();
        app.switch_mode(Mode::Break);
        app.toggle_run();

        let start = Instant::now();
        app.on_tick(start);
        assert!(app.alert.is_none());

        app.on_tick(start + Duration::from_secs(300));
        assert_eq!(app.alert, Some(Completion::BreakOver));
        assert_eq!(app.session.mode(), Mode::Focus);
        assert!(!app.session.is_running());

        app.dismiss_alert();
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_duration_change_resets_session() {
        let mut app = app();
        app.toggle_run();
        app.set_focus_duration(FocusDuration::Long);

        assert!(!app.session.is_running());
        assert_eq!(app.session.time_left_seconds(), 3000);
        assert_eq!(app.status.as_deref(), Some("Focus 50 minutes, then rest 10"));
    }

    #[test]
    fn test_music_and_volume() {
        let mut app = app();
        app.toggle_music();
        assert!(app.music.is_playing());

        app.adjust_volume(true);
        assert_eq!(app.status.as_deref(), Some("Volume 35%"));

        app.shutdown();
        assert!(!app.music.is_playing());
    }

    #[test]
    fn test_next_theme() {
        let mut app = app();
        app.next_theme();
        assert_eq!(app.theme, Theme::Emerald);
    }
}
