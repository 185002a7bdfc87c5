//! Backfill engine: one dated commit per day, then a single push.
//!
//! A run moves through three phases in order - resolve the push target,
//! commit every day of the configured range, publish - and stops at the
//! first error. Commits already created are left in place.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use everyday_git::{GitOps, Oid};

use crate::config::BackfillConfig;
use crate::date_range::{DateRange, DayStamp};
use crate::error::{Error, Result};
use crate::record::DayRecord;

/// Remote and branch the backfilled history is pushed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    pub remote: String,
    pub branch: String,
}

impl fmt::Display for PushTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remote, self.branch)
    }
}

/// A day that was committed successfully.
#[derive(Debug, Clone)]
pub struct DayCommit {
    /// The day and the instant its commit is dated at.
    pub stamp: DayStamp,
    /// The new commit.
    pub oid: Oid,
}

/// What a run would do, without doing it.
#[derive(Debug, Clone)]
pub struct BackfillPlan {
    pub range: DateRange,
    pub day_count: usize,
    pub first: DayStamp,
    pub last: DayStamp,
    pub data_path: PathBuf,
}

/// Drives a backfill pass against any [`GitOps`] implementation.
pub struct Backfiller<'a, G: GitOps> {
    repo: &'a G,
    config: &'a BackfillConfig,
}

impl<'a, G: GitOps> Backfiller<'a, G> {
    /// Create a new backfiller.
    #[must_use]
    pub const fn new(repo: &'a G, config: &'a BackfillConfig) -> Self {
        Self { repo, config }
    }

    /// Resolve the remote and branch to push to.
    ///
    /// The remote is the configured name if a remote by that name exists,
    /// and the same configured name otherwise. A missing remote therefore
    /// surfaces at publish time, not here.
    ///
    /// # Errors
    /// Returns [`Error::Resolve`] if remotes can't be listed or HEAD is
    /// not on a branch.
    pub fn resolve_target(&self) -> Result<PushTarget> {
        let remotes = self.repo.remote_names().map_err(Error::Resolve)?;
        let remote = remotes
            .into_iter()
            .find(|name| *name == self.config.remote)
            .unwrap_or_else(|| self.config.remote.clone());

        let branch = self.repo.current_branch().map_err(Error::Resolve)?;

        Ok(PushTarget { remote, branch })
    }

    /// Absolute path of the tracked data file.
    ///
    /// # Errors
    /// Returns [`Error::Resolve`] for a repository without a working
    /// directory.
    pub fn data_path(&self) -> Result<PathBuf> {
        let workdir = self
            .repo
            .workdir()
            .ok_or(Error::Resolve(everyday_git::Error::BareRepository))?;
        Ok(workdir.join(&self.config.data_file))
    }

    /// Describe the run without touching the repository.
    ///
    /// # Errors
    /// Returns error if the data file location can't be determined.
    pub fn plan(&self) -> Result<BackfillPlan> {
        let range = self.config.range;
        Ok(BackfillPlan {
            range,
            day_count: range.day_count(),
            first: self.config.stamp(range.start()),
            last: self.config.stamp(range.end()),
            data_path: self.data_path()?,
        })
    }

    /// Write, stage and commit once per day of the range, oldest first.
    ///
    /// `on_commit` is called after each successful commit. The loop stops
    /// at the first failure.
    ///
    /// # Errors
    /// Returns the first write, stage or commit error.
    pub fn run_backfill<F>(&self, mut on_commit: F) -> Result<usize>
    where
        F: FnMut(&DayCommit),
    {
        let path = self.data_path()?;
        let mut created = 0;

        for day in self.config.range.days() {
            let commit = self.commit_day(&path, day)?;
            created += 1;
            on_commit(&commit);
        }

        Ok(created)
    }

    fn commit_day(&self, path: &Path, day: NaiveDate) -> Result<DayCommit> {
        let stamp = self.config.stamp(day);
        let date = stamp.iso();

        DayRecord::new(&stamp).write(path)?;

        self.repo
            .stage_path(path)
            .map_err(|source| Error::Stage {
                date: date.clone(),
                source,
            })?;

        let oid = self
            .repo
            .commit_at(&date, stamp.git_time())
            .map_err(|source| Error::Commit { date, source })?;

        Ok(DayCommit { stamp, oid })
    }

    /// Push the branch to the resolved remote.
    ///
    /// # Errors
    /// Returns [`Error::Push`] if the push is rejected or fails.
    pub fn publish(&self, target: &PushTarget) -> Result<()> {
        self.repo
            .push(&target.remote, &target.branch)
            .map_err(|source| Error::Push {
                remote: target.remote.clone(),
                branch: target.branch.clone(),
                source,
            })
    }

    /// Run the backfill loop and publish only if every day succeeded.
    ///
    /// # Errors
    /// Returns the first error from either phase.
    pub fn run_and_publish<F>(&self, target: &PushTarget, on_commit: F) -> Result<usize>
    where
        F: FnMut(&DayCommit),
    {
        let created = self.run_backfill(on_commit)?;
        self.publish(target)?;
        Ok(created)
    }
}
