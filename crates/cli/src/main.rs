//! # Ferrous FTL
//!
//! Loads, checks and migrates the daemon configuration

mod bootstrap;
mod commands;

use clap::{Parser, Subcommand};
use ferrous_ftl_infrastructure::FtlConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ferrous-ftl")]
#[command(version = "0.1.0")]
#[command(about = "Typed configuration for the FTL DNS daemon")]
struct Cli {
    /// Structured config file, read and written instead of the standard locations
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Legacy config file to import when no structured file exists
    #[arg(short = 'l', long)]
    legacy: Option<PathBuf>,

    /// Log level filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the configuration and report where it came from and what differs from defaults
    Check {
        #[arg(long)]
        json: bool,
    },
    /// Print the loaded configuration as a TOML document
    Dump,
    /// Print the value of one item
    Get {
        /// Dotted key, e.g. dns.blockingmode
        key: String,
        #[arg(long)]
        json: bool,
    },
    /// Write the loaded configuration to the structured file
    Migrate,
    /// Show the settings that are read before the full configuration
    Preload,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = FtlConfig::new(bootstrap::config_paths(cli.config, cli.legacy));

    let log_file = config.log_file_path();
    let _guard = bootstrap::init_logging(&cli.log_level, log_file.as_deref());

    match cli.command {
        Command::Check { json } => commands::check(&mut config, json),
        Command::Dump => commands::dump(&mut config),
        Command::Get { key, json } => commands::get(&mut config, &key, json),
        Command::Migrate => commands::migrate(&mut config),
        Command::Preload => commands::preload(&mut config),
    }
}
