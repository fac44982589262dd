//! Experiment configuration
//!
//! Identity and arm-level probabilities for the two-arm experiment.
//! The defaults reproduce the `feed_ranking_v2` demo constants.

use serde::Deserialize;

/// Experiment identity and event-level probabilities
///
/// `experiment_id` participates in the bucketing hash: changing it reshuffles
/// which users land in which arm.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Experiment identifier, hashed together with each user id for
    /// arm assignment
    /// Default: "feed_ranking_v2"
    pub experiment_id: String,

    /// Percentage of the hash space assigned to control, in [0, 100]
    /// Default: 50
    pub control_pct: u8,

    /// Per-impression click probability for the control arm
    /// Default: 0.10
    pub click_prob_control: f64,

    /// Absolute click-probability lift applied to the treatment arm
    /// Default: 0.003
    pub click_lift: f64,

    /// Mean per-impression save propensity for the control arm
    /// Default: 0.05
    pub save_prob_control: f64,

    /// Absolute save-propensity lift applied to the treatment arm
    /// Default: 0.002
    pub save_lift: f64,

    /// Probability that a save event also creates a board
    /// Default: 0.01
    pub board_create_prob: f64,

    /// Standard deviation of the per-user save propensity draw
    /// Default: 0.02
    pub user_variance_scale: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            experiment_id: "feed_ranking_v2".into(),
            control_pct: 50,
            click_prob_control: 0.10,
            click_lift: 0.003,
            save_prob_control: 0.05,
            save_lift: 0.002,
            board_create_prob: 0.01,
            user_variance_scale: 0.02,
        }
    }
}

impl ExperimentConfig {
    /// Per-impression click probability for the given arm flag
    pub fn click_prob(&self, treatment: bool) -> f64 {
        if treatment {
            self.click_prob_control + self.click_lift
        } else {
            self.click_prob_control
        }
    }

    /// Mean save propensity for the given arm flag
    pub fn save_prob_mean(&self, treatment: bool) -> f64 {
        if treatment {
            self.save_prob_control + self.save_lift
        } else {
            self.save_prob_control
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExperimentConfig::default();
        assert_eq!(config.experiment_id, "feed_ranking_v2");
        assert_eq!(config.control_pct, 50);
        assert_eq!(config.click_prob_control, 0.10);
        assert_eq!(config.save_lift, 0.002);
    }

    #[test]
    fn test_arm_probabilities() {
        let config = ExperimentConfig::default();
        assert_eq!(config.click_prob(false), 0.10);
        assert_eq!(config.click_prob(true), 0.103);
        assert_eq!(config.save_prob_mean(false), 0.05);
        assert_eq!(config.save_prob_mean(true), 0.052);
    }
}
