// ABOUTME: File logging setup for the binary.
// ABOUTME: The UI owns the terminal, so tracing output goes to a log file.

use std::fs::{self, OpenOptions};
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::{Context, Result};
use moto_core::config::LoggingSettings;
use tracing::Level;

/// Parse a level name, falling back to `info`
fn level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::INFO)
}

/// Install the global subscriber writing to the configured log file
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let path = settings
        .file_path()
        .context("No log file configured and no state directory available")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(level(&settings.level))
        .with_ansi(false)
        .init();
    Ok(())
}
