// src/logging.rs
// =============================================================================
// File logging for both subcommands.
//
// The dashboard draws over the whole terminal, so nothing may be printed to
// stdout/stderr while it runs. Every tracing event goes to
// `<data_local_dir>/repo-explorer/logs/repo-explorer.log.<date>` instead,
// one file per day.
//
// Verbosity comes from REPO_EXPLORER_LOG, using EnvFilter syntax:
//   REPO_EXPLORER_LOG=debug repo-explorer dashboard
//   REPO_EXPLORER_LOG=repo_explorer::app=debug repo-explorer list vercel
//
// Setting up logging can fail (read-only home, a directory squatting on the
// file name, a subscriber already installed). All of those come back as an
// Err; main prints a warning and carries on without logs.
// =============================================================================

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "REPO_EXPLORER_LOG";

// Our own events at info, everyone else's warnings
const DEFAULT_FILTER: &str = "repo_explorer=info,warn";

const LOG_FILE_PREFIX: &str = "repo-explorer.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Installs the global subscriber. Returns the directory the logs go to.
pub fn init() -> Result<PathBuf> {
    let dir = log_dir();
    let writer = open_log_file(&dir)?;

    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(DEFAULT_FILTER),
    };

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dir = %dir.display(),
        "logging started"
    );
    Ok(dir)
}

// Opens (or creates) today's log file under `dir`, creating `dir` as needed.
// The builder reports failures instead of panicking like
// `RollingFileAppender::new` does.
fn open_log_file(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("repo-explorer")
        .join("logs")
}
