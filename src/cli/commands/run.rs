//! Headless countdown command.
//!
//! Drives the same session state machine as the interactive timer, printing
//! progress to the terminal instead of drawing a screen.

use std::io::{IsTerminal, Write};
use std::time::{Duration, Instant};

use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::Config;
use crate::error::StudyTimerError;
use crate::features::effects::Effects;
use crate::features::focus::{drive, Completion, Mode, Session, Ticker};
use crate::output::{format_completion_pretty, format_run_json, format_status_line};

/// Longest sleep between wake-ups, so the status line stays fresh.
const MAX_SLEEP: Duration = Duration::from_millis(250);

/// Run the countdown for the requested number of phases.
///
/// Each natural expiry is announced, then the next phase starts
/// automatically until `args.phases` phases have completed.
///
/// # Errors
///
/// Returns an error if writing to stdout fails or JSON serialization fails.
pub fn run(config: &Config, args: &RunArgs, format: OutputFormat) -> Result<String, StudyTimerError> {
    let mut session = Session::new(args.duration.unwrap_or(config.timer.focus_minutes));
    session.switch_mode(args.mode);

    let mut effects = Effects::from_config(config, args.quiet);
    let mut ticker = Ticker::new(Duration::from_millis(args.tick_ms));
    let live = format == OutputFormat::Pretty && std::io::stdout().is_terminal();
    let mut completions: Vec<(Mode, Completion)> = Vec::new();

    tracing::info!(
        mode = %session.mode(),
        focus = %session.focus_duration(),
        phases = args.phases,
        "starting headless countdown"
    );

    session.toggle_run();
    while completions.len() < args.phases as usize {
        let now = Instant::now();
        let finished = session.mode();

        if let Some(completion) = drive(&mut session, &mut ticker, now) {
            effects.announce(completion);
            completions.push((finished, completion));

            if format == OutputFormat::Pretty {
                if live {
                    clear_line()?;
                }
                println!("{}", format_completion_pretty(completion, &session));
            }

            if completions.len() < args.phases as usize {
                session.toggle_run();
            }
            continue;
        }

        if live {
            print_status(&session)?;
        }

        let pause = ticker.until_next(Instant::now()).unwrap_or(MAX_SLEEP);
        std::thread::sleep(pause.min(MAX_SLEEP));
    }

    match format {
        OutputFormat::Json => format_run_json(&completions, &session),
        OutputFormat::Pretty => Ok(format!(
            "Completed {} phase{}. Up next: {}",
            completions.len(),
            if completions.len() == 1 { "" } else { "s" },
            format_status_line(&session)
        )),
    }
}

fn print_status(session: &Session) -> Result<(), StudyTimerError> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\r{}\x1b[K", format_status_line(session))?;
    stdout.flush()?;
    Ok(())
}

fn clear_line() -> Result<(), StudyTimerError> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\r\x1b[K")?;
    stdout.flush()?;
    Ok(())
}
