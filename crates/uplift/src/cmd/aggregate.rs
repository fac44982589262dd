//! Aggregate command - derive metric artifacts from generated CSVs
//!
//! Reads the three entity tables and writes the artifacts the reporting
//! layer consumes: per-user metrics, per-arm summary, and daily metrics.
//!
//! # Usage
//!
//! ```bash
//! # Read from and write next to data/
//! uplift aggregate
//!
//! # Separate output directory
//! uplift aggregate --data data/ --out reports/
//! ```

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use uplift_analytics::{
    daily_metrics, save_rate_lift, summarize_arms, user_metrics, write_csv, Dataset,
    ARM_SUMMARY_FILE, DAILY_METRICS_FILE, USER_METRICS_FILE,
};

#[derive(Args, Debug, Default)]
pub struct AggregateArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding users.csv, sessions.csv, events.csv
    /// (defaults to the configured output dir)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Directory for derived artifacts (defaults to the data directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Quiet mode - don't print the summary table
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: AggregateArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let data_dir = args.data.unwrap_or_else(|| config.output.dir.clone());
    let out_dir = args.out.unwrap_or_else(|| data_dir.clone());

    let dataset = Dataset::load(&data_dir)
        .with_context(|| format!("failed to load dataset from {}", data_dir.display()))?;

    let per_user = user_metrics(&dataset);
    let summary = summarize_arms(&per_user);
    let daily = daily_metrics(&dataset);

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    write_csv(&out_dir.join(USER_METRICS_FILE), &per_user)?;
    write_csv(&out_dir.join(ARM_SUMMARY_FILE), &summary)?;
    write_csv(&out_dir.join(DAILY_METRICS_FILE), &daily)?;

    if !args.quiet {
        println!(
            "Loaded {} users, {} sessions, {} events from {}",
            dataset.users.len(),
            dataset.sessions.len(),
            dataset.events.len(),
            data_dir.display()
        );
        println!();
        println!(
            "{:<10} {:>7} {:>12} {:>8} {:>7} {:>9} {:>15}",
            "arm", "users", "impressions", "clicks", "saves", "mean ctr", "mean save rate"
        );
        for row in &summary {
            println!(
                "{:<10} {:>7} {:>12} {:>8} {:>7} {:>9.4} {:>15.4}",
                row.treatment.as_str(),
                row.users,
                row.impressions,
                row.clicks,
                row.saves,
                row.mean_ctr,
                row.mean_save_rate
            );
        }
        println!();
        println!(
            "Save-rate lift (treatment - control): {:+.5}",
            save_rate_lift(&summary)
        );
        println!(
            "Wrote {}, {}, {} to {}",
            USER_METRICS_FILE,
            ARM_SUMMARY_FILE,
            DAILY_METRICS_FILE,
            out_dir.display()
        );
    }

    Ok(())
}
