//! `everyday` command - write one dated commit per day, then push.

use anyhow::{Context, Result};
use everyday_core::{BackfillConfig, BackfillPlan, Backfiller};
use everyday_git::Repository;

use crate::output;

/// Run the backfill over the fixed date range.
pub fn run(dry_run: bool) -> Result<()> {
    let repo = Repository::open_current().context("Not inside a git repository")?;
    let config = BackfillConfig::default();
    let backfiller = Backfiller::new(&repo, &config);

    let target = backfiller.resolve_target()?;
    output::info(&format!("Remote: {}", target.remote));
    output::info(&format!("Branch: {}", target.branch));

    if dry_run {
        print_plan(&backfiller.plan()?);
        return Ok(());
    }

    let created = backfiller.run_and_publish(&target, |commit| {
        output::success(&format!("Commit created for {}", commit.stamp));
    })?;

    output::success(&format!("Pushed {created} commits to {target}"));
    Ok(())
}

fn print_plan(plan: &BackfillPlan) {
    output::info(&format!(
        "Dry run - would commit {} days ({})",
        plan.day_count, plan.range
    ));
    output::detail(&format!("  first: {}", plan.first));
    output::detail(&format!("  last:  {}", plan.last));
    output::detail(&format!("  file:  {}", plan.data_path.display()));
}
