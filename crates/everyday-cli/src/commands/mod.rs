//! Command-line definition and command implementations.

use clap::Parser;

pub mod backfill;

/// Backfill the current repository with one commit per day from
/// 2024-01-01 through 2025-07-17, then push the branch to origin.
#[derive(Parser, Debug)]
#[command(name = "everyday", version)]
pub struct Cli {
    /// Show the planned run without writing, committing or pushing
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}
