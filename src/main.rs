//! Strictly Tower - unified CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use strictly_tower::{Cli, Command, GameConfig, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            disks,
            config,
            log_file,
            dump_state,
        } => {
            init_file_logging(&log_file)?;
            let config = load_config(config.as_deref(), disks)?;
            let view = run_tui(config).await?;
            if dump_state {
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            Ok(())
        }
        Command::PrintConfig { disks, config } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();

            let config = load_config(config.as_deref(), disks)?;
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

/// Sends logs to a file; the TUI owns stdout while it runs.
fn init_file_logging(log_file: &Path) -> Result<()> {
    let log = std::fs::File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Loads the config file if given, then applies command-line overrides.
#[instrument]
fn load_config(path: Option<&Path>, disks: Option<u32>) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            GameConfig::default()
        }
    };

    if let Some(disks) = disks {
        info!(disks, "Overriding disk count");
        config = config.with_disk_count(disks);
    }

    config.validate()?;
    Ok(config)
}
