//! Dataset loading
//!
//! Reads the three generated entity tables back from CSV. Consumers must
//! not assume any row order; the generator guarantees none.

use std::path::Path;

use serde::de::DeserializeOwned;

use uplift_model::{Event, Session, User};
use uplift_sinks::{EVENTS_FILE, SESSIONS_FILE, USERS_FILE};

use crate::error::{AnalyticsError, Result};

/// A complete generated dataset held in memory
#[derive(Debug, Default)]
pub struct Dataset {
    /// User table
    pub users: Vec<User>,
    /// Session table
    pub sessions: Vec<Session>,
    /// Event table
    pub events: Vec<Event>,
}

impl Dataset {
    /// Load `users.csv`, `sessions.csv`, and `events.csv` from a directory
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            users: read_table(&dir.join(USERS_FILE))?,
            sessions: read_table(&dir.join(SESSIONS_FILE))?,
            events: read_table(&dir.join(EVENTS_FILE))?,
        })
    }

    /// Build a dataset from already-loaded records
    pub fn from_parts(users: Vec<User>, sessions: Vec<Session>, events: Vec<Event>) -> Self {
        Self {
            users,
            sessions,
            events,
        }
    }

    /// Whether the dataset holds no records at all
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.sessions.is_empty() && self.events.is_empty()
    }
}

/// Read one CSV table into typed records
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| AnalyticsError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    reader
        .deserialize()
        .map(|row| {
            row.map_err(|e| AnalyticsError::Read {
                path: path.display().to_string(),
                source: e,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = Dataset::load("/no/such/dataset/dir");
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains(USERS_FILE));
    }

    #[test]
    fn test_empty_dataset() {
        assert!(Dataset::default().is_empty());
    }
}
