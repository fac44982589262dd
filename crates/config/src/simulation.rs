//! Simulation configuration
//!
//! Horizon and distribution parameters for session/event generation.

use serde::Deserialize;

/// Session and event simulation parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of simulated days. Zero yields no sessions or events.
    /// Default: 7
    pub num_days: u32,

    /// Poisson mean for sessions per user per day (floored at 1)
    /// Default: 1.2
    pub sessions_per_day_mean: f64,

    /// LogNormal mu for session length in minutes
    /// Default: 1.5
    pub session_length_mu: f64,

    /// LogNormal sigma for session length
    /// Default: 0.5
    pub session_length_sigma: f64,

    /// Lower clip for session length (minutes)
    /// Default: 2.0
    pub session_length_min: f64,

    /// Upper clip for session length (minutes)
    /// Default: 10.0
    pub session_length_max: f64,

    /// Lower bound of the uniform impressions-per-minute rate
    /// Default: 1.5
    pub impressions_per_minute_min: f64,

    /// Upper bound of the uniform impressions-per-minute rate
    /// Default: 3.0
    pub impressions_per_minute_max: f64,

    /// RNG seed for reproducible aggregate distributions. Identifiers stay
    /// unique regardless of seed. None draws from OS entropy.
    /// Default: none
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_days: 7,
            sessions_per_day_mean: 1.2,
            session_length_mu: 1.5,
            session_length_sigma: 0.5,
            session_length_min: 2.0,
            session_length_max: 10.0,
            impressions_per_minute_min: 1.5,
            impressions_per_minute_max: 3.0,
            seed: None,
        }
    }
}
