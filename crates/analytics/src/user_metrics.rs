//! Per-user metrics
//!
//! One row per user: event counts plus CTR and save rate. Users with no
//! impressions get zero rates rather than NaN.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use uplift_model::{Arm, EventType};

use crate::dataset::Dataset;

/// Derived per-user metrics file name
pub const USER_METRICS_FILE: &str = "user_metrics.csv";

/// Per-user engagement metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMetricsRow {
    /// User this row describes
    pub user_id: Uuid,
    /// Assigned experiment arm
    pub treatment: Arm,
    /// Impression events
    pub impressions: u64,
    /// Click events
    pub clicks: u64,
    /// Save events
    pub saves: u64,
    /// clicks / impressions (0 when no impressions)
    pub ctr: f64,
    /// saves / impressions (0 when no impressions)
    pub save_rate: f64,
}

/// Compute per-user metrics, one row per user in table order
pub fn user_metrics(dataset: &Dataset) -> Vec<UserMetricsRow> {
    #[derive(Default)]
    struct Tally {
        impressions: u64,
        clicks: u64,
        saves: u64,
    }

    let mut tallies: HashMap<Uuid, Tally> = HashMap::with_capacity(dataset.users.len());
    for event in &dataset.events {
        let tally = tallies.entry(event.user_id).or_default();
        match event.event_type {
            EventType::Impression => tally.impressions += 1,
            EventType::Click => tally.clicks += 1,
            EventType::Save => tally.saves += 1,
        }
    }

    dataset
        .users
        .iter()
        .map(|user| {
            let tally = tallies.remove(&user.user_id).unwrap_or_default();
            let (ctr, save_rate) = if tally.impressions > 0 {
                (
                    tally.clicks as f64 / tally.impressions as f64,
                    tally.saves as f64 / tally.impressions as f64,
                )
            } else {
                (0.0, 0.0)
            };
            UserMetricsRow {
                user_id: user.user_id,
                treatment: user.treatment,
                impressions: tally.impressions,
                clicks: tally.clicks,
                saves: tally.saves,
                ctr,
                save_rate,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "user_metrics_test.rs"]
mod user_metrics_test;
