//! Output configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Output location for generated artifacts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated CSVs (created if missing)
    /// Default: "data"
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}
