//! Asesor Processor - Main entry point
//!
//! Validates, normalizes and aggregates an advisor file and writes the valid
//! records to a timestamped CSV file.

use anyhow::Result;
use asesor_processor::cli::{self, Cli};
use asesor_processor::Config;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env();

    // Initialize logging (stderr only; stdout carries the report)
    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = cli::run(cli, &config) {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
