//! In-memory sink
//!
//! Accumulates records in vectors. Used by tests and by in-process
//! aggregation; not intended for large populations.

use uplift_model::{Event, Session, User};

use crate::error::Result;
use crate::RecordSink;

/// Sink that collects all records in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Collected users
    pub users: Vec<User>,
    /// Collected sessions
    pub sessions: Vec<Session>,
    /// Collected events
    pub events: Vec<Event>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records collected across all three tables
    pub fn record_count(&self) -> usize {
        self.users.len() + self.sessions.len() + self.events.len()
    }
}

impl RecordSink for MemorySink {
    fn write_user(&mut self, user: &User) -> Result<()> {
        self.users.push(user.clone());
        Ok(())
    }

    fn write_session(&mut self, session: &Session) -> Result<()> {
        self.sessions.push(session.clone());
        Ok(())
    }

    fn write_event(&mut self, event: &Event) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
