//! User record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Arm, Country, DeviceType};

/// A synthetic population member.
///
/// `treatment` is a pure function of `(user_id, experiment_id)`; see the
/// bucketing module in `uplift-gen`. `save_prob_user` is the user's latent
/// per-impression save propensity, drawn once at creation and clipped to
/// [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier
    pub user_id: Uuid,

    /// Device the user engages from
    pub device_type: DeviceType,

    /// User country
    pub country: Country,

    /// Whether the user joined recently
    pub new_user: bool,

    /// Saves recorded in the pre-experiment period (CUPED covariate)
    pub pre_period_saves: u32,

    /// Date the user joined
    pub join_date: NaiveDate,

    /// Experiment this user is enrolled in
    pub experiment_id: String,

    /// Assigned experiment arm
    pub treatment: Arm,

    /// Latent per-impression save probability, in [0, 1]
    pub save_prob_user: f64,
}
