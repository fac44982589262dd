//! Population generation
//!
//! Builds the synthetic user population: sampled device/country, new-user
//! flag, pre-period saves, join date, hash-bucketed arm assignment, and a
//! per-user save propensity drawn around the arm's baseline.

use chrono::{Duration, NaiveDate};
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::Rng;
use rand_distr::Normal;
use uuid::Uuid;

use uplift_config::{ExperimentConfig, PopulationConfig};
use uplift_model::{Country, DeviceType, User};

use crate::bucket::assign_arm;
use crate::error::{GenError, Result};

/// Generator for user records.
///
/// Distribution objects are built once at construction; sampling is
/// infallible afterwards.
pub struct PopulationGenerator {
    experiment_id: String,
    control_pct: u8,
    num_users: u64,
    device_index: WeightedIndex<f64>,
    country_index: WeightedIndex<f64>,
    new_user_prob: f64,
    pre_period_saves_max: u32,
    join_lookback_days: u32,
    save_prob_control: Normal<f64>,
    save_prob_treatment: Normal<f64>,
}

impl PopulationGenerator {
    /// Build a generator from validated config
    pub fn new(experiment: &ExperimentConfig, population: &PopulationConfig) -> Result<Self> {
        let device_index = WeightedIndex::new(population.device_weights.as_array())
            .map_err(|e| GenError::distribution("device weights", e))?;
        let country_index = WeightedIndex::new(population.country_weights.as_array())
            .map_err(|e| GenError::distribution("country weights", e))?;

        let save_prob_control = Normal::new(
            experiment.save_prob_mean(false),
            experiment.user_variance_scale,
        )
        .map_err(|e| GenError::distribution("save propensity (control)", e))?;
        let save_prob_treatment = Normal::new(
            experiment.save_prob_mean(true),
            experiment.user_variance_scale,
        )
        .map_err(|e| GenError::distribution("save propensity (treatment)", e))?;

        Ok(Self {
            experiment_id: experiment.experiment_id.clone(),
            control_pct: experiment.control_pct,
            num_users: population.num_users,
            device_index,
            country_index,
            new_user_prob: population.new_user_prob,
            pre_period_saves_max: population.pre_period_saves_max,
            join_lookback_days: population.join_lookback_days,
            save_prob_control,
            save_prob_treatment,
        })
    }

    /// Number of users this generator will produce
    pub fn num_users(&self) -> u64 {
        self.num_users
    }

    /// Generate one user as of `today`
    pub fn generate_user<R: Rng>(&self, rng: &mut R, today: NaiveDate) -> User {
        let user_id = Uuid::new_v4();
        let device_type = DeviceType::ALL[self.device_index.sample(rng)];
        let country = Country::ALL[self.country_index.sample(rng)];
        let new_user = rng.gen_bool(self.new_user_prob);
        let pre_period_saves = rng.gen_range(0..=self.pre_period_saves_max);
        let join_date = today - Duration::days(rng.gen_range(0..=self.join_lookback_days) as i64);

        let treatment = assign_arm(
            &user_id.to_string(),
            &self.experiment_id,
            self.control_pct,
        );
        let propensity = if treatment.is_treatment() {
            &self.save_prob_treatment
        } else {
            &self.save_prob_control
        };
        let save_prob_user = propensity.sample(rng).clamp(0.0, 1.0);

        User {
            user_id,
            device_type,
            country,
            new_user,
            pre_period_saves,
            join_date,
            experiment_id: self.experiment_id.clone(),
            treatment,
            save_prob_user,
        }
    }
}

#[cfg(test)]
#[path = "population_test.rs"]
mod population_test;
