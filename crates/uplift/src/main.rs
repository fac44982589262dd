//! Uplift - Synthetic A/B experiment data generator
//!
//! # Usage
//!
//! ```bash
//! # Generate the dataset (default command)
//! uplift
//! uplift generate --users 5000 --days 7 --seed 42
//! uplift --config configs/example.toml
//!
//! # Aggregate generated CSVs into derived metric artifacts
//! uplift aggregate --data data/
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use uplift_config::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Uplift - Synthetic A/B experiment data generator
#[derive(Parser, Debug)]
#[command(name = "uplift")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    // Global args that apply to generate when no subcommand given
    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate users, sessions, and events CSVs
    Generate(cmd::generate::GenerateArgs),

    /// Aggregate generated CSVs into derived metric artifacts
    Aggregate(cmd::aggregate::AggregateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Explicit subcommand
        Some(Command::Generate(mut args)) => {
            // CLI global --config overrides subcommand config if both specified
            if args.config.is_none() && cli.config.is_some() {
                args.config = cli.config;
            }
            let log_level = resolve_log_level(cli.log_level.as_deref(), args.config.as_deref());
            init_logging(&log_level)?;
            cmd::generate::run(args)
        }
        Some(Command::Aggregate(mut args)) => {
            if args.config.is_none() && cli.config.is_some() {
                args.config = cli.config;
            }
            // Aggregate just outputs to stdout and files
            cmd::aggregate::run(args)
        }
        // No subcommand = generate (default behavior)
        None => {
            let log_level = resolve_log_level(cli.log_level.as_deref(), cli.config.as_deref());
            init_logging(&log_level)?;
            let args = cmd::generate::GenerateArgs {
                config: cli.config,
                ..Default::default()
            };
            cmd::generate::run(args)
        }
    }
}

/// Resolve log level: CLI flag > config file > default "info"
fn resolve_log_level(cli_level: Option<&str>, config_path: Option<&std::path::Path>) -> String {
    // CLI flag takes precedence
    if let Some(level) = cli_level {
        return level.to_string();
    }

    // Try to load from config file if specified
    if let Some(path) = config_path {
        if path.exists() {
            if let Ok(config) = Config::from_file(path) {
                return config.log.level.as_str().to_string();
            }
        }
    }

    // Default
    "info".to_string()
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();

    Ok(())
}
