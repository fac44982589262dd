//! Uplift Analytics
//!
//! Derived tabular artifacts computed from a generated dataset:
//!
//! - **User metrics**: per-user impressions/clicks/saves, CTR, save rate
//! - **Arm summary**: per-arm means and the absolute save-rate lift
//! - **Daily metrics**: impressions/clicks/saves per (UTC day, arm)
//!
//! Aggregation is plain groupby/ratio work over the three entity tables;
//! statistical testing (z-test, CUPED, Bayesian probability) is a reporting
//! concern and lives outside this crate.

mod arm_summary;
mod daily;
mod dataset;
mod error;
mod user_metrics;

pub use arm_summary::{save_rate_lift, summarize_arms, ArmSummaryRow, ARM_SUMMARY_FILE};
pub use daily::{daily_metrics, DailyMetricsRow, DAILY_METRICS_FILE};
pub use dataset::Dataset;
pub use error::{AnalyticsError, Result};
pub use user_metrics::{user_metrics, UserMetricsRow, USER_METRICS_FILE};

use serde::Serialize;
use std::path::Path;

/// Write one derived artifact as a CSV with a header row
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| AnalyticsError::Write {
        path: path.display().to_string(),
        source: e,
    })?;
    for row in rows {
        writer.serialize(row).map_err(|e| AnalyticsError::Write {
            path: path.display().to_string(),
            source: e,
        })?;
    }
    writer.flush().map_err(|e| AnalyticsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
