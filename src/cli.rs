//! Command-line surface: a file path and an integer threshold.

use clap::Parser;
use std::num::IntErrorKind;
use std::path::PathBuf;

/// CLI arguments for `stmtcount`.
#[derive(Parser, Debug)]
#[command(
    name = "stmtcount",
    version,
    about = "Fail if a file has more statement-like lines than a threshold",
    long_about = "Counts lines that contain none of '.', ':' or '#'. Prints \
                  \"Counted N statements\" and exits 1 when the count is above THRESHOLD."
)]
pub struct Cli {
    /// File to scan.
    pub path: PathBuf,

    /// Maximum number of statement-like lines allowed. Any integer.
    #[arg(allow_negative_numbers = true, value_parser = parse_threshold)]
    pub threshold: i128,
}

/// Parse an integer threshold of any size.
///
/// Counts are `u64`, so clamping out-of-range values to the `i128` bounds
/// gives the same verdict as the exact value would.
pub fn parse_threshold(s: &str) -> Result<i128, String> {
    match s.parse::<i128>() {
        Ok(threshold) => Ok(threshold),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i128::MAX),
            IntErrorKind::NegOverflow => Ok(i128::MIN),
            _ => Err(e.to_string()),
        },
    }
}

/// Configuration for [`crate::StatementCountRule`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatementCountArgs {
    /// File to scan.
    pub path: PathBuf,
    /// The run fails when the count is strictly greater than this.
    pub threshold: i128,
}

impl From<Cli> for StatementCountArgs {
    fn from(cli: Cli) -> Self {
        StatementCountArgs {
            path: cli.path,
            threshold: cli.threshold,
        }
    }
}
