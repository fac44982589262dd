//! Configuration validation
//!
//! Validates config consistency:
//! - Probabilities fall in [0, 1] and `control_pct` in [0, 100]
//! - Categorical weights are non-negative with a positive total
//! - Clipping and sampling ranges are ordered and positive

use crate::error::{ConfigError, Result};
use crate::Config;

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_experiment(config)?;
    validate_population(config)?;
    validate_simulation(config)?;
    Ok(())
}

/// Validate experiment probabilities
fn validate_experiment(config: &Config) -> Result<()> {
    let exp = &config.experiment;

    if exp.experiment_id.is_empty() {
        return Err(ConfigError::invalid_value(
            "experiment",
            "experiment_id",
            "must not be empty",
        ));
    }

    if exp.control_pct > 100 {
        return Err(ConfigError::invalid_value(
            "experiment",
            "control_pct",
            format!("must be <= 100, got {}", exp.control_pct),
        ));
    }

    let probabilities: [(&'static str, f64); 4] = [
        ("click_prob_control", exp.click_prob_control),
        ("save_prob_control", exp.save_prob_control),
        ("board_create_prob", exp.board_create_prob),
        ("user_variance_scale", exp.user_variance_scale),
    ];
    for (field, value) in probabilities {
        check_probability("experiment", field, value)?;
    }

    // Lifts are absolute deltas; the lifted probability must stay in range
    if !(0.0..=1.0).contains(&(exp.click_prob_control + exp.click_lift)) {
        return Err(ConfigError::invalid_value(
            "experiment",
            "click_lift",
            "lifted click probability must stay in [0, 1]",
        ));
    }
    if !(0.0..=1.0).contains(&(exp.save_prob_control + exp.save_lift)) {
        return Err(ConfigError::invalid_value(
            "experiment",
            "save_lift",
            "lifted save propensity must stay in [0, 1]",
        ));
    }

    Ok(())
}

/// Validate population distributions
fn validate_population(config: &Config) -> Result<()> {
    let pop = &config.population;

    check_probability("population", "new_user_prob", pop.new_user_prob)?;

    if pop.device_weights.as_array().iter().any(|w| *w < 0.0)
        || pop.device_weights.total() <= 0.0
    {
        return Err(ConfigError::invalid_value(
            "population",
            "device_weights",
            "weights must be non-negative with a positive total",
        ));
    }

    if pop.country_weights.as_array().iter().any(|w| *w < 0.0)
        || pop.country_weights.total() <= 0.0
    {
        return Err(ConfigError::invalid_value(
            "population",
            "country_weights",
            "weights must be non-negative with a positive total",
        ));
    }

    Ok(())
}

/// Validate simulation distribution parameters
fn validate_simulation(config: &Config) -> Result<()> {
    let sim = &config.simulation;

    if sim.sessions_per_day_mean <= 0.0 {
        return Err(ConfigError::invalid_value(
            "simulation",
            "sessions_per_day_mean",
            "must be positive",
        ));
    }

    if sim.session_length_sigma <= 0.0 {
        return Err(ConfigError::invalid_value(
            "simulation",
            "session_length_sigma",
            "must be positive",
        ));
    }

    if sim.session_length_min <= 0.0 || sim.session_length_min > sim.session_length_max {
        return Err(ConfigError::invalid_value(
            "simulation",
            "session_length_min",
            "must be positive and <= session_length_max",
        ));
    }

    if sim.impressions_per_minute_min <= 0.0
        || sim.impressions_per_minute_min > sim.impressions_per_minute_max
    {
        return Err(ConfigError::invalid_value(
            "simulation",
            "impressions_per_minute_min",
            "must be positive and <= impressions_per_minute_max",
        ));
    }

    Ok(())
}

/// Check a single probability field is in [0, 1]
fn check_probability(section: &'static str, field: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::invalid_value(
            section,
            field,
            format!("must be in [0, 1], got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_experiment_id_rejected() {
        let result = Config::from_str("[experiment]\nexperiment_id = \"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result =
            Config::from_str("[population]\ndevice_weights = { mobile = -1, desktop = 25, tablet = 5 }");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_weight_total_rejected() {
        let result = Config::from_str(
            "[population]\ncountry_weights = { US = 0, CA = 0, GB = 0, AU = 0, IN = 0 }",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_inverted_session_length_range_rejected() {
        let result =
            Config::from_str("[simulation]\nsession_length_min = 12.0\nsession_length_max = 10.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_lift_pushing_probability_out_of_range_rejected() {
        let result =
            Config::from_str("[experiment]\nclick_prob_control = 0.99\nclick_lift = 0.02");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_users_is_valid() {
        // Degenerate but allowed: produces an empty population
        let config = Config::from_str("[population]\nnum_users = 0").unwrap();
        assert_eq!(config.population.num_users, 0);
    }
}
