//! Error types for fitness-trials
//!
//! Every failure is local and synchronous: the call either succeeds fully or
//! returns one of these variants without touching session state.

use thiserror::Error;

use crate::session::Summary;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// fitness-trials error types
#[derive(Error, Debug)]
pub enum Error {
    /// A trial was appended to a session that has already been closed
    #[error("Session for '{subject_id}' is closed\nStart a new session to record further trials")]
    SessionClosed {
        /// Subject whose session rejected the append
        subject_id: String,
    },

    /// A trial value was NaN or infinite
    #[error("Invalid trial value: {value}\nTrial values must be finite numbers")]
    InvalidValue {
        /// The rejected value
        value: f64,
    },

    /// A summary was requested while the session is still accepting trials
    #[error("Session for '{subject_id}' is still open\nClose it before reading the summary")]
    SessionOpen {
        /// Subject whose session is still open
        subject_id: String,
    },

    /// `close()` was called on a session that was already closed.
    ///
    /// Carries the summary frozen by the first close, which is unchanged.
    #[error(
        "Session for '{subject_id}' is already closed ({} trials summarized)",
        .summary.count()
    )]
    AlreadyClosed {
        /// Subject whose session was closed twice
        subject_id: String,
        /// Summary frozen by the first close
        summary: Box<Summary>,
    },

    /// A bounded session reached its configured trial count
    #[error("Trial limit reached: session accepts at most {limit} trials")]
    TrialLimitReached {
        /// Configured maximum number of trials
        limit: usize,
    },

    /// Input rejected by a configuration or protocol check
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No session is registered for the subject
    #[error("No session for subject '{0}'")]
    UnknownSubject(String),

    /// A session is already registered for the subject
    #[error("Subject '{0}' already has a session")]
    DuplicateSubject(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV log error
    #[error("CSV log error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error signals a repeated `close()` call.
    #[must_use]
    pub const fn is_already_closed(&self) -> bool {
        matches!(self, Self::AlreadyClosed { .. })
    }

    /// The frozen summary carried by [`Error::AlreadyClosed`], if any.
    #[must_use]
    pub fn frozen_summary(&self) -> Option<&Summary> {
        match self {
            Self::AlreadyClosed { summary, .. } => Some(summary),
            _ => None,
        }
    }
}
