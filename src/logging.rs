//! Logging setup.
//!
//! Stdout and stderr belong to the terminal UI, so log lines go to a file
//! under the data directory instead. Filtering follows `RUST_LOG` with an
//! `info` default.

use std::fs::{self, OpenOptions};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE_NAME: &str = "qseek.log";

/// Initialize the global tracing subscriber with a file sink.
///
/// Callers should treat failure as non-fatal; the application works fine
/// without a log file.
pub fn initialize() -> Result<()> {
    let data_dir = app_dirs::get_data_dir()?;
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
