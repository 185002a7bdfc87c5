//! Error types for everyday-core.

use std::path::PathBuf;

use chrono::NaiveDate;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in everyday-core operations.
///
/// Git failures are wrapped by the phase they happened in so the
/// top-level report says what the run was doing when it stopped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Range whose start lies after its end.
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Date or date-time string that could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// Remote or branch lookup failed.
    #[error("failed to resolve push target: {0}")]
    Resolve(#[source] everyday_git::Error),

    /// Data file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file could not be staged.
    #[error("failed to stage data file for {date}: {source}")]
    Stage {
        date: String,
        #[source]
        source: everyday_git::Error,
    },

    /// Commit creation failed.
    #[error("failed to commit {date}: {source}")]
    Commit {
        date: String,
        #[source]
        source: everyday_git::Error,
    },

    /// Push to the remote failed.
    #[error("failed to push {branch} to {remote}: {source}")]
    Push {
        remote: String,
        branch: String,
        #[source]
        source: everyday_git::Error,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
