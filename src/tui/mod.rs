//! Terminal User Interface (TUI) for studytimer.
//!
//! Provides the interactive full-screen timer.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::cli::args::TimerArgs;
use crate::config::Config;
use crate::error::StudyTimerError;
use crate::features::effects::Effects;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config, args: &TimerArgs) -> Result<(), StudyTimerError> {
    let effects = Effects::from_config(config, args.quiet);
    let mut app = App::new(
        config,
        args.duration.unwrap_or(config.timer.focus_minutes),
        args.theme.unwrap_or(config.appearance.theme),
        effects,
    );

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| StudyTimerError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    leave_raw_mode_on_error(
        execute!(stdout, EnterAlternateScreen),
        "Failed to setup terminal",
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            execute!(io::stdout(), LeaveAlternateScreen).ok();
            return leave_raw_mode_on_error(Err(e), "Failed to create terminal");
        }
    };

    tracing::info!("timer screen opened");
    let result = run_app(&mut terminal, &mut app);
    app.shutdown();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Turn a setup failure into a terminal error and switch raw mode back off.
fn leave_raw_mode_on_error<T>(result: io::Result<T>, context: &str) -> Result<T, StudyTimerError> {
    result.map_err(|e| {
        disable_raw_mode().ok();
        StudyTimerError::Terminal(format!("{context}: {e}"))
    })
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), StudyTimerError> {
    loop {
        app.on_tick(Instant::now());

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| StudyTimerError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::ToggleRun => app.toggle_run(),
                event::Action::Reset => app.reset(),
                event::Action::SwitchMode(mode) => app.switch_mode(mode),
                event::Action::SetDuration(duration) => app.set_focus_duration(duration),
                event::Action::NextTheme => app.next_theme(),
                event::Action::ToggleMusic => app.toggle_music(),
                event::Action::VolumeUp => app.adjust_volume(true),
                event::Action::VolumeDown => app.adjust_volume(false),
                event::Action::TestSound => app.test_sound(),
                event::Action::Help => app.toggle_help(),
                event::Action::DismissAlert => app.dismiss_alert(),
            }
        }
    }

    tracing::info!("timer screen closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_failure_becomes_terminal_error() {
        let result: Result<(), _> =
            leave_raw_mode_on_error(Err(io::Error::other("no tty")), "Failed to setup terminal");

        match result {
            Err(StudyTimerError::Terminal(msg)) => {
                assert_eq!(msg, "Failed to setup terminal: no tty");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_setup_success_passes_through() {
        let result = leave_raw_mode_on_error(Ok(7), "unused");
        assert!(matches!(result, Ok(7)));
    }
}
