//! # everyday-git
//!
//! Git operations abstraction layer for everyday, built on git2-rs.
//! Provides the handful of operations a history backfill needs:
//! remote and branch inspection, staging, dated commits and push.

mod error;
mod repository;
mod traits;

pub use error::{Error, Result};
pub use git2::{Oid, Time};
pub use repository::Repository;
pub use traits::GitOps;
