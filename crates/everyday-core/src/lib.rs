//! # everyday-core
//!
//! Core library for everyday: the calendar range model, the per-day data
//! file, run configuration and the backfill engine that drives a
//! [`everyday_git::GitOps`] implementation through resolve, commit and
//! publish phases.

pub mod backfill;
pub mod config;
pub mod date_range;
mod error;
pub mod record;

#[cfg(test)]
mod test_mocks;

pub use backfill::{BackfillPlan, Backfiller, DayCommit, PushTarget};
pub use config::BackfillConfig;
pub use date_range::{DateCursor, DateRange, DayStamp};
pub use error::{Error, Result};
pub use record::DayRecord;
