//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log lines go to a file or nowhere.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber appending to `path`.
///
/// The filter comes from `RUST_LOG`, falling back to `info`.
pub fn init<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(log_file = %path.as_ref().display(), "logging initialized");
    Ok(())
}
