//! Sink error types

use std::io;
use thiserror::Error;

/// Result type for sink operations
pub type Result<T> = std::result::Result<T, SinkError>;

/// Errors from record sinks
#[derive(Debug, Error)]
pub enum SinkError {
    /// Failed to create the output directory
    #[error("failed to create output directory '{path}'")]
    CreateDir {
        /// Directory path
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to open an output file for writing
    #[error("failed to open '{file}' for writing")]
    Open {
        /// File name
        file: &'static str,
        /// Underlying CSV/IO error
        #[source]
        source: csv::Error,
    },

    /// Failed to write a record
    #[error("failed to write record to '{file}'")]
    Write {
        /// File name
        file: &'static str,
        /// Underlying CSV/IO error
        #[source]
        source: csv::Error,
    },

    /// Failed to flush buffered records
    #[error("failed to flush '{file}'")]
    Flush {
        /// File name
        file: &'static str,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}
