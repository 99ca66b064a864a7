//! Daemon configuration
//!
//! Flags win over environment variables, environment variables over the
//! built-in defaults.

use clap::Parser;
use std::path::PathBuf;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "pdfs";

/// Command line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "reportd", about = "HTTP service that renders report PDFs to disk")]
pub struct Cli {
    /// Port to listen on (falls back to $PORT, then 3000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory receiving generated PDFs (falls back to $REPORTD_OUTPUT_DIR, then ./pdfs)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// Resolved daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub output_dir: PathBuf,
}

impl Cli {
    /// Resolve the configuration from flags, environment and defaults
    pub fn into_config(self) -> Config {
        let port = self
            .port
            .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_PORT);

        let output_dir = self
            .output_dir
            .or_else(|| std::env::var("REPORTD_OUTPUT_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Config { port, output_dir }
    }
}
