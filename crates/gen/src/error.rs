//! Generation error types

use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors from the generation engine
#[derive(Debug, Error)]
pub enum GenError {
    /// A sampling distribution could not be constructed from the
    /// configured parameters
    #[error("invalid {what} distribution: {message}")]
    Distribution {
        /// Which distribution failed
        what: &'static str,
        /// Error message from the distribution constructor
        message: String,
    },

    /// A sink write failed; fatal, the run terminates
    #[error(transparent)]
    Sink(#[from] uplift_sinks::SinkError),
}

impl GenError {
    /// Create a Distribution error from a distribution constructor failure
    pub fn distribution(what: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Distribution {
            what,
            message: err.to_string(),
        }
    }
}
