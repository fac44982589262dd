//! Per-arm summary
//!
//! Aggregates per-user metrics into one row per arm: user count, event
//! totals, and mean per-user rates. The absolute save-rate lift (treatment
//! minus control) is the experiment's headline number.

use serde::{Deserialize, Serialize};

use uplift_model::Arm;

use crate::user_metrics::UserMetricsRow;

/// Derived arm summary file name
pub const ARM_SUMMARY_FILE: &str = "arm_summary.csv";

/// Summary metrics for one experiment arm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmSummaryRow {
    /// Experiment arm
    pub treatment: Arm,
    /// Users assigned to this arm
    pub users: u64,
    /// Total impression events
    pub impressions: u64,
    /// Total click events
    pub clicks: u64,
    /// Total save events
    pub saves: u64,
    /// Mean per-user CTR
    pub mean_ctr: f64,
    /// Mean per-user save rate
    pub mean_save_rate: f64,
}

/// Summarize per-user metrics into per-arm rows, control first.
///
/// An arm with no users still gets a row with zero counts, so the artifact
/// always has exactly two rows.
pub fn summarize_arms(rows: &[UserMetricsRow]) -> Vec<ArmSummaryRow> {
    [Arm::Control, Arm::Treatment]
        .into_iter()
        .map(|arm| {
            let arm_rows: Vec<&UserMetricsRow> =
                rows.iter().filter(|r| r.treatment == arm).collect();
            let users = arm_rows.len() as u64;
            let mean = |f: fn(&UserMetricsRow) -> f64| {
                if arm_rows.is_empty() {
                    0.0
                } else {
                    arm_rows.iter().map(|r| f(r)).sum::<f64>() / arm_rows.len() as f64
                }
            };
            ArmSummaryRow {
                treatment: arm,
                users,
                impressions: arm_rows.iter().map(|r| r.impressions).sum(),
                clicks: arm_rows.iter().map(|r| r.clicks).sum(),
                saves: arm_rows.iter().map(|r| r.saves).sum(),
                mean_ctr: mean(|r| r.ctr),
                mean_save_rate: mean(|r| r.save_rate),
            }
        })
        .collect()
}

/// Absolute save-rate lift: treatment mean minus control mean
pub fn save_rate_lift(summary: &[ArmSummaryRow]) -> f64 {
    let rate = |arm: Arm| {
        summary
            .iter()
            .find(|row| row.treatment == arm)
            .map(|row| row.mean_save_rate)
            .unwrap_or(0.0)
    };
    rate(Arm::Treatment) - rate(Arm::Control)
}
