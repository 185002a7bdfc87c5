//! Trait abstractions for git operations.
//!
//! This module defines the `GitOps` trait which abstracts the git operations
//! a backfill run needs, enabling dependency injection and testability.

use std::path::Path;

use git2::{Oid, Time};

use crate::Result;

/// Trait for git repository operations.
///
/// This trait abstracts git operations, allowing for:
/// - Dependency injection in commands/services
/// - Mock implementations for testing
///
/// Every method is a blocking call; callers sequence them one at a time.
#[allow(clippy::missing_errors_doc)]
pub trait GitOps {
    // === Repository Info ===

    /// Get the working directory path.
    fn workdir(&self) -> Option<&Path>;

    /// Get the current branch name.
    ///
    /// Returns an error if HEAD is detached.
    fn current_branch(&self) -> Result<String>;

    // === Remote Operations ===

    /// List the names of all configured remotes.
    fn remote_names(&self) -> Result<Vec<String>>;

    /// Push a branch to the named remote.
    fn push(&self, remote: &str, branch: &str) -> Result<()>;

    // === Commit Operations ===

    /// Stage a single path (relative to the working directory or absolute).
    fn stage_path(&self, path: &Path) -> Result<()>;

    /// Commit the index on top of HEAD with author and committer time
    /// forced to `when`.
    fn commit_at(&self, message: &str, when: Time) -> Result<Oid>;
}
