//! Error types for everyday-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during git operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not inside a git repository.
    #[error("not a git repository")]
    NotARepository,

    /// Repository has no working directory.
    #[error("cannot operate on a bare repository")]
    BareRepository,

    /// HEAD is detached (not on a branch).
    #[error("HEAD is detached - checkout a branch first")]
    DetachedHead,

    /// The index matches the parent commit's tree.
    #[error("nothing to commit, working tree clean")]
    NothingToCommit,

    /// Path to stage lies outside the working directory.
    #[error("path is outside the repository: {0}")]
    PathOutsideWorkdir(String),

    /// Push failed.
    #[error("push failed: {0}")]
    PushFailed(String),

    /// Underlying git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}
