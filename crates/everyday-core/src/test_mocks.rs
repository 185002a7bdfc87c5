//! Mock implementation of `GitOps` for testing the backfill engine
//! without a real repository.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use everyday_git::{GitOps, Oid, Result as GitResult, Time};
use tempfile::TempDir;

/// A commit recorded by [`MockGitOps`].
#[derive(Debug, Clone)]
pub struct MockCommit {
    pub message: String,
    pub seconds: i64,
    pub offset_minutes: i32,
    /// Content of the last staged file at commit time.
    pub content: String,
}

/// Mock implementation of `GitOps` backed by a scratch directory.
pub struct MockGitOps {
    workdir: Option<TempDir>,
    pub current_branch: RefCell<Option<String>>,
    pub remotes: RefCell<Vec<String>>,
    pub staged: RefCell<Vec<PathBuf>>,
    pub commits: RefCell<Vec<MockCommit>>,
    pub pushes: RefCell<Vec<(String, String)>>,
    pub commit_attempts: RefCell<usize>,
    pub fail_commit_at: RefCell<Option<usize>>,
    pub stage_should_fail: RefCell<bool>,
    pub push_should_fail: RefCell<bool>,
}

impl Default for MockGitOps {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGitOps {
    pub fn new() -> Self {
        Self::from_workdir(Some(TempDir::new().unwrap()))
    }

    pub fn bare() -> Self {
        Self::from_workdir(None)
    }

    fn from_workdir(workdir: Option<TempDir>) -> Self {
        Self {
            workdir,
            current_branch: RefCell::new(Some("main".to_string())),
            remotes: RefCell::new(Vec::new()),
            staged: RefCell::new(Vec::new()),
            commits: RefCell::new(Vec::new()),
            pushes: RefCell::new(Vec::new()),
            commit_attempts: RefCell::new(0),
            fail_commit_at: RefCell::new(None),
            stage_should_fail: RefCell::new(false),
            push_should_fail: RefCell::new(false),
        }
    }

    pub fn with_remote(self, name: &str) -> Self {
        self.remotes.borrow_mut().push(name.to_string());
        self
    }

    pub fn with_current_branch(self, name: &str) -> Self {
        *self.current_branch.borrow_mut() = Some(name.to_string());
        self
    }

    pub fn with_detached_head(self) -> Self {
        *self.current_branch.borrow_mut() = None;
        self
    }

    /// Fail the `attempt`-th commit (1-based).
    pub fn with_commit_failure_at(self, attempt: usize) -> Self {
        *self.fail_commit_at.borrow_mut() = Some(attempt);
        self
    }

    pub fn with_stage_failure(self) -> Self {
        *self.stage_should_fail.borrow_mut() = true;
        self
    }

    pub fn with_push_failure(self) -> Self {
        *self.push_should_fail.borrow_mut() = true;
        self
    }

    pub fn commit_messages(&self) -> Vec<String> {
        self.commits
            .borrow()
            .iter()
            .map(|c| c.message.clone())
            .collect()
    }
}

impl GitOps for MockGitOps {
    fn workdir(&self) -> Option<&Path> {
        self.workdir.as_ref().map(TempDir::path)
    }

    fn current_branch(&self) -> GitResult<String> {
        self.current_branch
            .borrow()
            .clone()
            .ok_or(everyday_git::Error::DetachedHead)
    }

    fn remote_names(&self) -> GitResult<Vec<String>> {
        Ok(self.remotes.borrow().clone())
    }

    fn push(&self, remote: &str, branch: &str) -> GitResult<()> {
        if *self.push_should_fail.borrow() {
            return Err(everyday_git::Error::PushFailed(format!(
                "'{remote}' does not appear to be a git repository"
            )));
        }
        self.pushes
            .borrow_mut()
            .push((remote.to_string(), branch.to_string()));
        Ok(())
    }

    fn stage_path(&self, path: &Path) -> GitResult<()> {
        if *self.stage_should_fail.borrow() {
            return Err(everyday_git::Error::PathOutsideWorkdir(
                path.display().to_string(),
            ));
        }
        self.staged.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn commit_at(&self, message: &str, when: Time) -> GitResult<Oid> {
        let attempt = {
            let mut attempts = self.commit_attempts.borrow_mut();
            *attempts += 1;
            *attempts
        };
        if *self.fail_commit_at.borrow() == Some(attempt) {
            return Err(everyday_git::Error::NothingToCommit);
        }

        let content = self
            .staged
            .borrow()
            .last()
            .and_then(|path| fs::read_to_string(path).ok())
            .unwrap_or_default();

        self.commits.borrow_mut().push(MockCommit {
            message: message.to_string(),
            seconds: when.seconds(),
            offset_minutes: when.offset_minutes(),
            content,
        });
        Ok(Oid::zero())
    }
}
