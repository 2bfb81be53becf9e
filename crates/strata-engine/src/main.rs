//! # Strata
//!
//! Headless terrain viewer. Loads a config (first argument, or the default
//! config location), replays its scripted input, and renders the final frame.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use strata_engine::{App, EngineConfig, InputEvent};
use strata_view::Framebuffer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("strata=info".parse()?))
        .init();

    info!("Strata starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => EngineConfig::read(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::load(),
    };
    config.validate();

    let events = InputEvent::parse_script(config.script.iter().map(String::as_str))
        .context("parsing input script")?;

    let mut app = App::new(&config);
    app.run(events);

    let (width, height) = app.viewport().viewport();
    let mut frame = Framebuffer::new(width, height);
    let drawn = app.render(&mut frame);
    info!("Chunks rendered: {drawn}");

    if let Some(path) = &config.output_path {
        frame.save_png(path)?;
    }

    info!("Strata shutdown complete");
    Ok(())
}
