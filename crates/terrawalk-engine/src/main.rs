//! # Terrawalk
//!
//! Main entry point for the headless terrain walker.
//!
//! Usage: `terrawalk [CONFIG_PATH]`. Without a path, `terrawalk.toml` in the
//! working directory is used if present.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use terrawalk_engine::app;

/// Main entry point.
fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the rendered map.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("terrawalk=info".parse()?))
        .init();

    info!("Terrawalk starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    app::run(config_path.as_deref())?;

    info!("Terrawalk shutdown complete");
    Ok(())
}
