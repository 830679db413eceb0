//! Command-line interface for strictly_tower.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tower - Tower of Hanoi with a timer and leaderboard
#[derive(Parser, Debug)]
#[command(name = "strictly_tower")]
#[command(about = "Tower of Hanoi in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the puzzle in the terminal
    Play {
        /// Number of disks (overrides the config file)
        #[arg(short, long)]
        disks: Option<u32>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// File to write logs to while the terminal UI is active
        #[arg(long, default_value = "strictly_tower.log")]
        log_file: PathBuf,

        /// Print the final view-state as JSON on exit
        #[arg(long)]
        dump_state: bool,
    },

    /// Print the effective configuration as TOML
    PrintConfig {
        /// Number of disks (overrides the config file)
        #[arg(short, long)]
        disks: Option<u32>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["strictly_tower", "play"]).unwrap();
        match cli.command {
            Command::Play {
                disks,
                config,
                log_file,
                dump_state,
            } => {
                assert_eq!(disks, None);
                assert_eq!(config, None);
                assert_eq!(log_file, PathBuf::from("strictly_tower.log"));
                assert!(!dump_state);
            }
            Command::PrintConfig { .. } => panic!("Expected play"),
        }
    }

    #[test]
    fn test_print_config_with_disks() {
        let cli = Cli::try_parse_from(["strictly_tower", "print-config", "--disks", "7"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::PrintConfig { disks: Some(7), .. }
        ));
    }
}
