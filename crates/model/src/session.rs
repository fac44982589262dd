//! Session record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Arm, Country, DeviceType};

/// One app session belonging to a user.
///
/// Device, country, experiment, and arm are copied from the owning user at
/// creation. Created once, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque unique identifier
    pub session_id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Session start time
    pub session_start: DateTime<Utc>,

    /// Session length in minutes, clipped to [2, 10]
    pub session_length: f64,

    /// Denormalized from the owning user
    pub device_type: DeviceType,

    /// Denormalized from the owning user
    pub country: Country,

    /// Denormalized from the owning user
    pub experiment_id: String,

    /// Denormalized from the owning user
    pub treatment: Arm,
}
