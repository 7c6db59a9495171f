use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::features::focus::{FocusDuration, Mode};
use crate::features::theme::Theme;

#[derive(Parser)]
#[command(name = "studytimer")]
#[command(about = "A terminal focus timer with Pomodoro-style cycles")]
#[command(long_about = "studytimer - A terminal focus timer

Alternate focus sessions and breaks. After four focus sessions the timer
moves into a long break automatically.

QUICK START:
  studytimer                    Open the interactive timer
  studytimer tui -d 50          Start with 50 minute focus sessions
  studytimer run --phases 2     Headless countdown through focus and break
  studytimer week               Show the weekly focus chart

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  studytimer <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the configured format.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the configuration file
    #[arg(long, env = "STUDYTIMER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Command to run (defaults to the interactive timer)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer
    ///
    /// Full-screen terminal timer with mode tabs, duration presets,
    /// theme switching, background music, and the weekly chart.
    ///
    /// # Keys
    ///
    ///   space       Start / pause
    ///   r           Reset the current mode
    ///   f / b / l   Focus / break / long break
    ///   1 / 2       25 / 50 minute focus sessions
    ///   t           Next theme
    ///   m           Music on / off
    ///   + / -       Music volume
    ///   s           Test sound
    ///   q           Quit
    #[command(alias = "ui")]
    Tui(TimerArgs),

    /// Run the countdown without the interactive screen
    ///
    /// Counts down in the current terminal and follows the automatic
    /// focus / break progression until the requested number of phases
    /// has completed.
    ///
    /// # Examples
    ///
    ///   studytimer run                      One 25 minute focus session
    ///   studytimer run -d 50 --phases 2     Focus 50, then a 10 minute break
    ///   studytimer run --mode break         Just a short break
    Run(RunArgs),

    /// Show the focus duration presets
    Presets,

    /// Show the weekly focus chart
    Week,

    /// Sound commands
    Sound(SoundArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   studytimer completions zsh > ~/.zfunc/_studytimer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options for the interactive timer.
#[derive(Args, Debug, Default, Clone)]
pub struct TimerArgs {
    /// Focus duration in minutes (25 or 50)
    #[arg(short, long, value_parser = parse_focus_duration)]
    pub duration: Option<FocusDuration>,

    /// Accent theme (pink, emerald, indigo)
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Disable sounds, music, and desktop notifications
    #[arg(short, long)]
    pub quiet: bool,
}

/// Options for the headless countdown.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Focus duration in minutes (25 or 50)
    #[arg(short, long, value_parser = parse_focus_duration)]
    pub duration: Option<FocusDuration>,

    /// Mode to start in (focus, break, long-break)
    #[arg(short, long, default_value = "focus")]
    pub mode: Mode,

    /// Number of phases to complete before exiting
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub phases: u32,

    /// Disable sounds and desktop notifications
    #[arg(short, long)]
    pub quiet: bool,

    /// Milliseconds per timer second
    #[arg(long, hide = true, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,
}

#[derive(Args)]
pub struct SoundArgs {
    #[command(subcommand)]
    pub command: SoundCommands,
}

#[derive(Subcommand)]
pub enum SoundCommands {
    /// Play the alarm sound once
    Test {
        /// Play the end-of-break chime instead of the focus bell
        #[arg(long)]
        chime: bool,
    },
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse a focus duration such as "25", "50", or "50m".
fn parse_focus_duration(s: &str) -> Result<FocusDuration, String> {
    let minutes: u32 = s
        .trim()
        .trim_end_matches('m')
        .parse()
        .map_err(|_| format!("'{s}' is not a number of minutes"))?;
    FocusDuration::try_from(minutes).map_err(|e| e.to_string())
}
