//! Diagnostic logging.
//!
//! The filter comes from `STUDYTIMER_LOG` and defaults to `warn`. The
//! interactive timer owns the terminal, so it logs to a file instead of
//! stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STUDYTIMER_LOG";

fn filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Initialize logging to stderr.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Initialize logging, appending to `log_file`.
///
/// Without a usable log file, log output is discarded so that it never
/// lands on top of the TUI.
pub fn init_file(log_file: Option<&Path>) {
    let opened = log_file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    match opened {
        Some(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::sink)
                .try_init()
                .ok();
        }
    }
}
