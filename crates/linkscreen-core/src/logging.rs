//! Log setup for the `linkscreen` binary.
//!
//! The classifier logs every stage decision at `debug`. Those go to a file under
//! the XDG state dir so stdout stays clean for `--json` output; stderr is only
//! used when the file cannot be opened.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "linkscreen.log";

/// Filter directives for a `-v` count. `RUST_LOG` takes precedence when set.
pub fn directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,linkscreen_core=info,linkscreen=info",
        1 => "info,linkscreen_core=debug,linkscreen=debug",
        _ => "debug,linkscreen_core=trace,linkscreen=trace",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)))
}

/// `~/.local/state/linkscreen/linkscreen.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkscreen")?;
    Ok(xdg_dirs.get_state_home().join("linkscreen").join(LOG_FILE))
}

/// Install a subscriber appending to [`log_file_path`]. Returns the path.
///
/// On failure nothing is installed, so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging(verbosity: u8) -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log dir {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::debug!(verbosity, "linkscreen logging to {}", path.display());
    Ok(path)
}

/// Log to stderr instead of a file.
pub fn init_logging_stderr(verbosity: u8) {
    // A subscriber may already be installed; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
