//! Generate command - run the simulation and write CSVs
//!
//! # Usage
//!
//! ```bash
//! # Defaults: 5000 users, 7 days, data/ output
//! uplift generate
//!
//! # Smaller reproducible run
//! uplift generate --users 100 --days 2 --seed 42 --out demo_data/
//! ```

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use uplift_gen::{seeded_rng, Simulator};
use uplift_sinks::DiskCsvSink;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of users to generate (overrides config)
    #[arg(short, long)]
    pub users: Option<u64>,

    /// Number of simulated days (overrides config)
    #[arg(short, long)]
    pub days: Option<u32>,

    /// RNG seed for reproducible distributions (overrides config)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Quiet mode - don't print the summary
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;

    // CLI flags override config values
    if let Some(users) = args.users {
        config.population.num_users = users;
    }
    if let Some(days) = args.days {
        config.simulation.num_days = days;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(out) = args.out {
        config.output.dir = out;
    }

    let simulator = Simulator::new(&config).context("failed to build simulator")?;
    let mut rng = seeded_rng(config.simulation.seed);
    let mut sink = DiskCsvSink::create(&config.output.dir)
        .with_context(|| format!("failed to open output in {}", config.output.dir.display()))?;

    let stats = simulator
        .run(&mut rng, &mut sink)
        .context("generation failed")?;

    if !args.quiet {
        println!(
            "Experiment {} ({}% control)",
            config.experiment.experiment_id, config.experiment.control_pct
        );
        println!(
            "Generated {} users, {} sessions, {} events over {} days",
            stats.users, stats.sessions, stats.events, config.simulation.num_days
        );
        println!(
            "  impressions: {}  clicks: {}  saves: {} ({} with boards)",
            stats.impressions, stats.clicks, stats.saves, stats.boards
        );
        println!("Wrote users.csv, sessions.csv, events.csv to {}", config.output.dir.display());
    }

    Ok(())
}
