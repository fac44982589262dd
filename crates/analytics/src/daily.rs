//! Per-day metrics
//!
//! Impression/click/save counts per (UTC day, arm), sorted by day then arm.
//! Feeds the time-series charts in the reporting layer.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use uplift_model::{Arm, EventType};

use crate::dataset::Dataset;

/// Derived daily metrics file name
pub const DAILY_METRICS_FILE: &str = "daily_metrics.csv";

/// Event counts for one (day, arm) cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetricsRow {
    /// UTC calendar day
    pub day: NaiveDate,
    /// Experiment arm
    pub treatment: Arm,
    /// Impression events
    pub impressions: u64,
    /// Click events
    pub clicks: u64,
    /// Save events
    pub saves: u64,
}

/// Group events into per-day, per-arm counts.
///
/// Days with no events produce no row; consumers plot what exists.
pub fn daily_metrics(dataset: &Dataset) -> Vec<DailyMetricsRow> {
    // BTreeMap keeps output sorted by (day, arm) without a second pass.
    let mut cells: BTreeMap<(NaiveDate, bool), (u64, u64, u64)> = BTreeMap::new();

    for event in &dataset.events {
        let key = (event.timestamp.date_naive(), event.treatment.is_treatment());
        let cell = cells.entry(key).or_default();
        match event.event_type {
            EventType::Impression => cell.0 += 1,
            EventType::Click => cell.1 += 1,
            EventType::Save => cell.2 += 1,
        }
    }

    cells
        .into_iter()
        .map(|((day, treated), (impressions, clicks, saves))| DailyMetricsRow {
            day,
            treatment: if treated { Arm::Treatment } else { Arm::Control },
            impressions,
            clicks,
            saves,
        })
        .collect()
}
