//! Session generation
//!
//! For each user and simulated day, draws `max(1, Poisson(λ))` sessions.
//! Session starts land inside the simulated day via a random minute offset;
//! lengths follow a clipped LogNormal.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_distr::{Distribution as _, LogNormal, Poisson};
use uuid::Uuid;

use uplift_config::SimulationConfig;
use uplift_model::{Session, User};

use crate::error::{GenError, Result};

/// Generator for session records
pub struct SessionGenerator {
    num_days: u32,
    sessions_per_day: Poisson<f64>,
    session_length: LogNormal<f64>,
    length_min: f64,
    length_max: f64,
}

impl SessionGenerator {
    /// Build a generator from validated config
    pub fn new(simulation: &SimulationConfig) -> Result<Self> {
        let sessions_per_day = Poisson::new(simulation.sessions_per_day_mean)
            .map_err(|e| GenError::distribution("sessions per day", e))?;
        let session_length =
            LogNormal::new(simulation.session_length_mu, simulation.session_length_sigma)
                .map_err(|e| GenError::distribution("session length", e))?;

        Ok(Self {
            num_days: simulation.num_days,
            sessions_per_day,
            session_length,
            length_min: simulation.session_length_min,
            length_max: simulation.session_length_max,
        })
    }

    /// Simulated horizon in days
    pub fn num_days(&self) -> u32 {
        self.num_days
    }

    /// Generate one user's sessions for a single simulated day.
    ///
    /// `day_offset` counts from 0 (oldest) to `num_days - 1` (most recent);
    /// starts are anchored `num_days - day_offset - 1` days before `now`,
    /// minus a random minute offset within the day. Always yields at least
    /// one session.
    pub fn generate_day<R: Rng>(
        &self,
        rng: &mut R,
        user: &User,
        now: DateTime<Utc>,
        day_offset: u32,
    ) -> Vec<Session> {
        let count = (self.sessions_per_day.sample(rng) as u64).max(1);
        let days_back = (self.num_days - day_offset - 1) as i64;

        (0..count)
            .map(|_| {
                let session_start = now
                    - Duration::days(days_back)
                    - Duration::minutes(rng.gen_range(0..=1440));
                let session_length = self
                    .session_length
                    .sample(rng)
                    .clamp(self.length_min, self.length_max);

                Session {
                    session_id: Uuid::new_v4(),
                    user_id: user.user_id,
                    session_start,
                    session_length,
                    device_type: user.device_type,
                    country: user.country,
                    experiment_id: user.experiment_id.clone(),
                    treatment: user.treatment,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;
