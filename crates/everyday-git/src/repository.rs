//! Repository wrapper providing high-level git operations.

use std::path::Path;
use std::process::Command;

use git2::{ErrorCode, Oid, Signature, Time};

use crate::error::{Error, Result};
use crate::traits::GitOps;

/// High-level wrapper around a git repository.
pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Open a repository at the given path.
    ///
    /// # Errors
    /// Returns error if no repository found at path or any parent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                Error::NotARepository
            } else {
                Error::Git2(e)
            }
        })?;
        Ok(Self { inner })
    }

    /// Open the repository containing the current directory.
    ///
    /// # Errors
    /// Returns error if not inside a git repository.
    pub fn open_current() -> Result<Self> {
        Self::open(".")
    }

    /// Get the path to the repository root (workdir).
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.inner.workdir()
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    // === Branch operations ===

    /// Get the name of the current branch.
    ///
    /// On an unborn branch (no commits yet) this is the branch HEAD
    /// points at.
    ///
    /// # Errors
    /// Returns error if HEAD is detached.
    pub fn current_branch(&self) -> Result<String> {
        let head = match self.inner.head() {
            Ok(head) => head,
            Err(e) if is_unborn(&e) => return self.unborn_branch(),
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Err(Error::DetachedHead);
        }

        head.shorthand()
            .map(String::from)
            .ok_or(Error::DetachedHead)
    }

    /// Check if HEAD is detached.
    ///
    /// # Errors
    /// Returns error if HEAD cannot be read.
    pub fn head_detached(&self) -> Result<bool> {
        Ok(self.inner.head_detached()?)
    }

    fn unborn_branch(&self) -> Result<String> {
        let head = self.inner.find_reference("HEAD")?;
        head.symbolic_target()
            .and_then(|target| target.strip_prefix("refs/heads/"))
            .map(String::from)
            .ok_or(Error::DetachedHead)
    }

    // === Remote operations ===

    /// List configured remote names.
    ///
    /// # Errors
    /// Returns error if the remote list cannot be read from config.
    pub fn remote_names(&self) -> Result<Vec<String>> {
        let remotes = self.inner.remotes()?;
        Ok(remotes.iter().flatten().map(String::from).collect())
    }

    /// Push a branch to a remote.
    ///
    /// Shells out to `git push` so configured credential helpers and
    /// SSH agents are honored.
    ///
    /// # Errors
    /// Returns error if the push is rejected or the remote is unreachable.
    pub fn push(&self, remote: &str, branch: &str) -> Result<()> {
        let workdir = self.workdir().ok_or(Error::BareRepository)?;

        let output = Command::new("git")
            .args(["push", remote, branch])
            .current_dir(workdir)
            .output()
            .map_err(|e| Error::PushFailed(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::PushFailed(stderr.trim().to_string()))
        }
    }

    // === Index and commit operations ===

    /// Stage a single file.
    ///
    /// Absolute paths must lie inside the working directory.
    ///
    /// # Errors
    /// Returns error if the path is outside the repository or the index
    /// cannot be updated.
    pub fn stage_path(&self, path: &Path) -> Result<()> {
        let workdir = self.workdir().ok_or(Error::BareRepository)?;
        let relative = if path.is_absolute() {
            path.strip_prefix(workdir)
                .map_err(|_| Error::PathOutsideWorkdir(path.display().to_string()))?
        } else {
            path
        };

        let mut index = self.inner.index()?;
        index.add_path(relative)?;
        index.write()?;
        Ok(())
    }

    /// Commit the current index on top of HEAD.
    ///
    /// Author and committer both use the configured identity with their
    /// timestamp replaced by `when`. The commit is refused if the index
    /// tree matches HEAD's tree.
    ///
    /// # Errors
    /// Returns `NothingToCommit` for an unchanged tree, or an error if
    /// the identity is not configured or the commit cannot be written.
    pub fn commit_at(&self, message: &str, when: Time) -> Result<Oid> {
        let signature = self.signature_at(when)?;

        let mut index = self.inner.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.inner.find_tree(tree_id)?;

        let parent = match self.inner.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if is_unborn(&e) => None,
            Err(e) => return Err(e.into()),
        };

        if parent.as_ref().is_some_and(|p| p.tree_id() == tree_id) {
            return Err(Error::NothingToCommit);
        }

        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        let oid = self.inner.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(oid)
    }

    // === Signature ===

    /// Get the configured identity with its time replaced by `when`.
    ///
    /// # Errors
    /// Returns error if git config doesn't have user.name/email.
    pub fn signature_at(&self, when: Time) -> Result<Signature<'static>> {
        let identity = self.inner.signature()?;
        let name = String::from_utf8_lossy(identity.name_bytes());
        let email = String::from_utf8_lossy(identity.email_bytes());
        Ok(Signature::new(&name, &email, &when)?)
    }

    // === Low-level access ===

    /// Get a reference to the underlying git2 repository.
    ///
    /// Use sparingly - prefer high-level methods.
    #[must_use]
    pub const fn inner(&self) -> &git2::Repository {
        &self.inner
    }
}

fn is_unborn(e: &git2::Error) -> bool {
    matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound)
}

impl GitOps for Repository {
    fn workdir(&self) -> Option<&Path> {
        self.workdir()
    }

    fn current_branch(&self) -> Result<String> {
        self.current_branch()
    }

    fn remote_names(&self) -> Result<Vec<String>> {
        self.remote_names()
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.push(remote, branch)
    }

    fn stage_path(&self, path: &Path) -> Result<()> {
        self.stage_path(path)
    }

    fn commit_at(&self, message: &str, when: Time) -> Result<Oid> {
        self.commit_at(message, when)
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.git_dir())
            .finish()
    }
}
