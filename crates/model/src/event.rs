//! Event record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{Arm, Country, DeviceType};

/// Kind of engagement event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// A pin was shown
    Impression,
    /// The pin was clicked
    Click,
    /// The pin was saved
    Save,
}

impl EventType {
    /// Wire string for this event type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Impression => "impression",
            Self::Click => "click",
            Self::Save => "save",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One engagement event within a session.
///
/// All events emitted for the same impression share `pin_id` and
/// `timestamp`. `board_id` is present only on a sampled subset of save
/// events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique identifier
    pub event_id: Uuid,

    /// Owning user (transitively via the session)
    pub user_id: Uuid,

    /// Event time, within the session window
    pub timestamp: DateTime<Utc>,

    /// Owning session
    pub session_id: Uuid,

    /// Kind of event
    pub event_type: EventType,

    /// Pin shown for this impression
    pub pin_id: Uuid,

    /// Board created at save time, if any (save events only)
    pub board_id: Option<Uuid>,

    /// Denormalized from the owning session
    pub experiment_id: String,

    /// Denormalized from the owning session
    pub treatment: Arm,

    /// Denormalized from the owning session
    pub device_type: DeviceType,

    /// Denormalized from the owning session
    pub country: Country,
}
