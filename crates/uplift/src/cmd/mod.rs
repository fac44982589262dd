//! Command implementations for the uplift CLI

pub mod aggregate;
pub mod generate;

use anyhow::{Context, Result};
use std::path::Path;
use uplift_config::Config;

/// Load config from an explicit path, or fall back to defaults.
///
/// An explicitly passed path that does not exist is an error; a missing
/// path just means "use the built-in demo experiment".
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}
