//! stmtcount: count statement-like lines in a file and gate on a threshold.
//!
//! USAGE:
//!   stmtcount <PATH> <THRESHOLD>
//!
//! Exit codes:
//! - `0` when the count is at or below `THRESHOLD`
//! - `1` when it is above; `Counted N statements` is printed to stdout first
//! - `2` on a usage error (from clap) or when the file cannot be read
//!
//! Logs go to stderr and follow `RUST_LOG` (default `warn`).

use clap::Parser;
use color_eyre::{Section, eyre::Report};
use std::process::ExitCode;
use stmtcount_core::{Cli, Rule, StatementCountArgs, StatementCountRule};
use tracing_subscriber::EnvFilter;

/// Exit code for failures that prevent a count. Matches clap's usage-error code.
const FATAL_EXIT_CODE: u8 = 2;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("warning: could not install error reporter: {e}");
    }
    init_tracing();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed CLI arguments");
    let args = StatementCountArgs::from(cli);

    match StatementCountRule::new().run(&args) {
        Ok(verdict) => {
            tracing::debug!(?verdict, "Run complete");
            ExitCode::from(verdict.exit_code())
        }
        Err(err) => {
            let suggestions = err.suggestions();
            let report = suggestions
                .into_iter()
                .fold(Report::new(err), |report, s| report.suggestion(s));
            eprintln!("Error: {report:?}");
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
