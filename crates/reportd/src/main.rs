//! Report PDF daemon
//!
//! Renders a fixed report layout into single-page PDF documents over HTTP
//! and keeps the results in a flat output directory.

use anyhow::Result;
use clap::Parser;
use reportd::config::Cli;
use reportd::{server, storage};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Cli::parse().into_config();
    info!("reportd v{} starting", env!("CARGO_PKG_VERSION"));

    storage::ensure_output_dir(&config.output_dir)?;

    // One-time, best-effort; a failure is only logged inside
    report_render::register_fonts();

    server::run(config).await
}
