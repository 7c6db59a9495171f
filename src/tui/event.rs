//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::StudyTimerError;
use crate::features::focus::{FocusDuration, Mode};
use crate::tui::app::App;

/// How long to wait for input before letting the timer tick.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    ToggleRun,
    /// Reset the current mode.
    Reset,
    /// Switch to a mode.
    SwitchMode(Mode),
    /// Change the focus duration.
    SetDuration(FocusDuration),
    /// Cycle the accent theme.
    NextTheme,
    /// Switch music on or off.
    ToggleMusic,
    /// Raise the music volume.
    VolumeUp,
    /// Lower the music volume.
    VolumeDown,
    /// Play the alarm sound.
    TestSound,
    /// Open or close the help overlay.
    Help,
    /// Close the alert popup.
    DismissAlert,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &App) -> Result<Option<Action>, StudyTimerError> {
    if !event::poll(POLL_TIMEOUT)
        .map_err(|e| StudyTimerError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| StudyTimerError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(app, key)),
        _ => Ok(None),
    }
}

/// Translate a key press into an action.
///
/// While an alert is open it swallows every key except Ctrl+C, and any key
/// dismisses it.
pub fn map_key(app: &App, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.alert.is_some() {
        return Some(Action::DismissAlert);
    }

    if app.show_help {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            _ => Some(Action::Help),
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        // Timer
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleRun),
        KeyCode::Char('r') => Some(Action::Reset),

        // Modes
        KeyCode::Char('f') => Some(Action::SwitchMode(Mode::Focus)),
        KeyCode::Char('b') => Some(Action::SwitchMode(Mode::Break)),
        KeyCode::Char('l') => Some(Action::SwitchMode(Mode::LongBreak)),

        // Presets
        KeyCode::Char('1') => Some(Action::SetDuration(FocusDuration::Short)),
        KeyCode::Char('2') => Some(Action::SetDuration(FocusDuration::Long)),

        // Look and sound
        KeyCode::Char('t') => Some(Action::NextTheme),
        KeyCode::Char('m') => Some(Action::ToggleMusic),
        KeyCode::Char('+' | '=') | KeyCode::Up => Some(Action::VolumeUp),
        KeyCode::Char('-') | KeyCode::Down => Some(Action::VolumeDown),
        KeyCode::Char('s') => Some(Action::TestSound),

        KeyCode::Char('?') => Some(Action::Help),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::features::effects::{Effects, NullNotifier, SilentPlayer};
    use crate::features::focus::Completion;
    use crate::features::theme::Theme;

    fn app() -> App {
        let config = Config::default();
        let effects =
            Effects::with_capabilities(&config, Box::new(SilentPlayer), Box::new(NullNotifier));
        App::new(&config, FocusDuration::Short, Theme::default(), effects)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_keys() {
        let app = app();
        assert_eq!(map_key(&app, press(KeyCode::Char(' '))), Some(Action::ToggleRun));
        assert_eq!(
            map_key(&app, press(KeyCode::Char('l'))),
            Some(Action::SwitchMode(Mode::LongBreak))
        );
        assert_eq!(
            map_key(&app, press(KeyCode::Char('2'))),
            Some(Action::SetDuration(FocusDuration::Long))
        );
        assert_eq!(map_key(&app, press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_alert_blocks_other_input() {
        let mut app = app();
        app.alert = Some(Completion::FocusComplete);

        assert_eq!(map_key(&app, press(KeyCode::Char('r'))), Some(Action::DismissAlert));
        assert_eq!(map_key(&app, press(KeyCode::Char('q'))), Some(Action::DismissAlert));
        assert_eq!(
            map_key(&app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_help_overlay_closes_on_any_key() {
        let mut app = app();
        app.show_help = true;
        assert_eq!(map_key(&app, press(KeyCode::Char('m'))), Some(Action::Help));
        assert_eq!(map_key(&app, press(KeyCode::Char('q'))), Some(Action::Quit));
    }
}
