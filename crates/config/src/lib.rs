//! Uplift Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//! The defaults reproduce the canonical `feed_ranking_v2` demo experiment.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use uplift_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[population]\nnum_users = 100").unwrap();
//! assert_eq!(config.population.num_users, 100);
//! ```
//!
//! # Example Full Config
//!
//! See `configs/example.toml` for all available options.

mod error;
mod experiment;
mod logging;
mod output;
mod population;
mod simulation;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use error::{ConfigError, Result};
pub use experiment::ExperimentConfig;
pub use logging::{LogConfig, LogLevel};
pub use output::OutputConfig;
pub use population::{CountryWeights, DeviceWeights, PopulationConfig};
pub use simulation::SimulationConfig;

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Experiment identity and arm-level probabilities
    pub experiment: ExperimentConfig,

    /// Population size and categorical distributions
    pub population: PopulationConfig,

    /// Session/event simulation horizon and distribution parameters
    pub simulation: SimulationConfig,

    /// Output location for generated CSVs
    pub output: OutputConfig,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Checks for:
    /// - Probabilities in [0, 1] and `control_pct` in [0, 100]
    /// - Positive categorical weight totals
    /// - Consistent clipping and sampling ranges
    fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.experiment.experiment_id, "feed_ranking_v2");
        assert_eq!(config.experiment.control_pct, 50);
        assert_eq!(config.population.num_users, 5000);
        assert_eq!(config.simulation.num_days, 7);
        assert_eq!(config.output.dir.to_str(), Some("data"));
    }

    #[test]
    fn test_minimal_config() {
        let toml = r#"
[population]
num_users = 100

[simulation]
num_days = 2
seed = 42
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.population.num_users, 100);
        assert_eq!(config.simulation.num_days, 2);
        assert_eq!(config.simulation.seed, Some(42));
        // Untouched sections keep defaults
        assert_eq!(config.experiment.click_prob_control, 0.10);
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[experiment]
experiment_id = "feed_ranking_v3"
control_pct = 40
click_prob_control = 0.12
click_lift = 0.005
save_prob_control = 0.06
save_lift = 0.001
board_create_prob = 0.02
user_variance_scale = 0.03

[population]
num_users = 250
device_weights = { mobile = 60, desktop = 30, tablet = 10 }
country_weights = { US = 80, CA = 5, GB = 5, AU = 5, IN = 5 }
new_user_prob = 0.5
pre_period_saves_max = 10
join_lookback_days = 30

[simulation]
num_days = 3
sessions_per_day_mean = 2.0
session_length_mu = 1.0
session_length_sigma = 0.3
session_length_min = 1.0
session_length_max = 20.0
impressions_per_minute_min = 2.0
impressions_per_minute_max = 4.0

[output]
dir = "out"

[log]
level = "debug"
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.experiment.experiment_id, "feed_ranking_v3");
        assert_eq!(config.experiment.control_pct, 40);
        assert_eq!(config.population.device_weights.mobile, 60.0);
        assert_eq!(config.population.country_weights.us, 80.0);
        assert_eq!(config.simulation.sessions_per_day_mean, 2.0);
        assert_eq!(config.output.dir.to_str(), Some("out"));
        assert_eq!(config.log.level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_str("invalid { toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_control_pct_over_100_rejected() {
        let result = Config::from_str("[experiment]\ncontrol_pct = 101");
        assert!(result.is_err());
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let result = Config::from_str("[experiment]\nclick_prob_control = 1.5");
        assert!(result.is_err());
    }
}
