// ABOUTME: Main application entry point.
// ABOUTME: Loads config, sets up file logging, and runs the terminal UI.

mod app;
mod fetch;
mod logging;
mod panes;

use anyhow::{Context, Result};
use moto_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load_or_default().context("Failed to load config")?;

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Logging disabled: {:#}", e);
    }
    tracing::info!("Starting moto");
    tracing::info!(
        "Layout {:?}, borders {} / {}",
        config.layout.mode,
        config.theme.active_border.label(),
        config.theme.inactive_border.label()
    );

    app::run(config).await
}
