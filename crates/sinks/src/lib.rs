//! Uplift Record Sinks
//!
//! Streaming destinations for generated records. The simulator writes each
//! record as it is produced (no in-memory table accumulation), so memory
//! stays bounded for larger populations.
//!
//! - [`DiskCsvSink`]: three CSVs (`users.csv`, `sessions.csv`, `events.csv`)
//!   with the schema columns as the header row
//! - [`MemorySink`]: in-memory vectors for tests and in-process aggregation

mod disk_csv;
mod error;
mod memory;

pub use disk_csv::{DiskCsvSink, EVENTS_FILE, SESSIONS_FILE, USERS_FILE};
pub use error::{Result, SinkError};
pub use memory::MemorySink;

use uplift_model::{Event, Session, User};

/// Streaming destination for generated records.
///
/// The simulator calls the write methods as records are produced, in no
/// guaranteed order across users, and `finish` exactly once at the end of a
/// run. Write failures are fatal: the run is idempotent and safely
/// re-runnable from scratch, so no retry semantics apply.
pub trait RecordSink {
    /// Write one user record
    fn write_user(&mut self, user: &User) -> Result<()>;

    /// Write one session record
    fn write_session(&mut self, session: &Session) -> Result<()>;

    /// Write one event record
    fn write_event(&mut self, event: &Event) -> Result<()>;

    /// Flush any buffered records
    fn finish(&mut self) -> Result<()>;
}
