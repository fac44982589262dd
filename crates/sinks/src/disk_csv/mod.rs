//! Disk CSV Sink - flat tabular output
//!
//! Writes the three entity tables as CSV files with the schema columns as
//! the header row. Records are streamed through buffered writers as they
//! arrive; nothing is held beyond the write buffers.
//!
//! # Output Layout
//!
//! ```text
//! data/
//! ├── users.csv
//! ├── sessions.csv
//! └── events.csv
//! ```
//!
//! Consumers read these by fixed column names and depend on `treatment`
//! being exactly `control`/`treatment`, timestamps being RFC 3339, and
//! `board_id` being nullable (empty field).

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use uplift_model::{Event, Session, User};

use crate::error::{Result, SinkError};
use crate::RecordSink;

/// User table file name
pub const USERS_FILE: &str = "users.csv";

/// Session table file name
pub const SESSIONS_FILE: &str = "sessions.csv";

/// Event table file name
pub const EVENTS_FILE: &str = "events.csv";

/// Streaming CSV sink writing one file per entity type
pub struct DiskCsvSink {
    users: csv::Writer<BufWriter<File>>,
    sessions: csv::Writer<BufWriter<File>>,
    events: csv::Writer<BufWriter<File>>,
    dir: PathBuf,
}

impl DiskCsvSink {
    /// Create the output directory (if missing) and open the three tables
    /// for writing. Existing files are truncated: a rerun replaces the
    /// previous dataset.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| SinkError::CreateDir {
            path: dir.display().to_string(),
            source: e,
        })?;

        Ok(Self {
            users: open_writer(&dir, USERS_FILE)?,
            sessions: open_writer(&dir, SESSIONS_FILE)?,
            events: open_writer(&dir, EVENTS_FILE)?,
            dir,
        })
    }

    /// Output directory this sink writes to
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Open one CSV writer over a buffered file
fn open_writer(dir: &Path, file: &'static str) -> Result<csv::Writer<BufWriter<File>>> {
    let path = dir.join(file);
    let handle = File::create(&path).map_err(|e| SinkError::Open {
        file,
        source: csv::Error::from(e),
    })?;
    Ok(csv::Writer::from_writer(BufWriter::new(handle)))
}

impl RecordSink for DiskCsvSink {
    fn write_user(&mut self, user: &User) -> Result<()> {
        self.users.serialize(user).map_err(|e| SinkError::Write {
            file: USERS_FILE,
            source: e,
        })
    }

    fn write_session(&mut self, session: &Session) -> Result<()> {
        self.sessions
            .serialize(session)
            .map_err(|e| SinkError::Write {
                file: SESSIONS_FILE,
                source: e,
            })
    }

    fn write_event(&mut self, event: &Event) -> Result<()> {
        self.events.serialize(event).map_err(|e| SinkError::Write {
            file: EVENTS_FILE,
            source: e,
        })
    }

    fn finish(&mut self) -> Result<()> {
        for (writer, file) in [
            (&mut self.users, USERS_FILE),
            (&mut self.sessions, SESSIONS_FILE),
            (&mut self.events, EVENTS_FILE),
        ] {
            writer
                .flush()
                .map_err(|e| SinkError::Flush { file, source: e })?;
        }
        tracing::debug!(dir = %self.dir.display(), "csv sink flushed");
        Ok(())
    }
}
