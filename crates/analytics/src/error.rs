//! Analytics error types

use std::io;
use thiserror::Error;

/// Result type for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Analytics errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Failed to read an input table
    #[error("failed to read '{path}'")]
    Read {
        /// File path
        path: String,
        /// Underlying CSV/IO error
        #[source]
        source: csv::Error,
    },

    /// Failed to write a derived artifact
    #[error("failed to write '{path}'")]
    Write {
        /// File path
        path: String,
        /// Underlying CSV/IO error
        #[source]
        source: csv::Error,
    },

    /// IO failure on flush
    #[error("failed to flush '{path}'")]
    Io {
        /// File path
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}
