//! everyday CLI - backfill a repository with one dated commit per day.

use clap::Parser;

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    if let Err(e) = commands::backfill::run(cli.dry_run) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
