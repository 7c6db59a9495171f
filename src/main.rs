use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;

use studytimer::cli::args::{Cli, Commands, TimerArgs};
use studytimer::cli::commands;
use studytimer::config::{ColorSetting, Config, Paths};
use studytimer::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = Paths::new().ok();
    let command = cli.command.unwrap_or_else(|| Commands::Tui(TimerArgs::default()));

    if matches!(command, Commands::Tui(_)) {
        let log_file = paths
            .as_ref()
            .filter(|p| p.ensure_dirs().is_ok())
            .map(|p| p.log_file.as_path());
        logging::init_file(log_file);
    } else {
        logging::init_stderr();
    }

    let config_path: PathBuf = match (&cli.config, &paths) {
        (Some(path), _) => path.clone(),
        (None, Some(paths)) => paths.config_file.clone(),
        (None, None) => anyhow::bail!("Could not determine home directory; pass --config"),
    };

    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match command {
        Commands::Tui(args) => {
            studytimer::tui::run(&config, &args)?;
            String::new()
        }
        Commands::Run(args) => commands::run(&config, &args, format)?,
        Commands::Presets => commands::presets(&config, format)?,
        Commands::Week => commands::week(format)?,
        Commands::Sound(args) => commands::sound(&config, args.command, format)?,
        Commands::Config(args) => commands::config(&config, &config_path, args.command, format)?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "studytimer", &mut io::stdout());
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
