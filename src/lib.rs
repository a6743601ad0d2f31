//! # stmtcount - statement-like line counting with a threshold gate
//!
//! stmtcount scans a text file once, counts the lines that contain none of
//! `.`, `:` or `#`, and compares that count against a threshold. A count
//! strictly above the threshold fails the check.
//!
//! ## Architecture
//!
//! - [`cli`] - Positional argument parsing and the rule configuration
//! - [`error`] - Error types for the crate
//! - [`file_utils`] - Opening the input and the lazy [`LineReader`]
//! - [`counter`] - The character filter and the running tally
//! - [`rule`] - The [`Rule`] trait
//! - [`statement_count_rule`] - The statement count check itself
//! - [`reporting`] - The `Counted N statements` diagnostic
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use stmtcount_core::{Rule, StatementCountArgs, StatementCountRule, Verdict};
//! use std::path::PathBuf;
//!
//! # fn main() -> stmtcount_core::Result<()> {
//! let args = StatementCountArgs {
//!     path: PathBuf::from("notes.txt"),
//!     threshold: 20,
//! };
//!
//! let report = StatementCountRule::new().analyze(&args)?;
//! if report.verdict() != Verdict::WithinThreshold {
//!     println!("{} statement-like lines", report.count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod counter;
pub mod error;
pub mod file_utils;
pub mod reporting;
pub mod rule;
pub mod statement_count_rule;

pub use crate::cli::{Cli, StatementCountArgs};
pub use crate::counter::{DEFAULT_EXCLUDED, StatementFilter, StmtCounter, count_statements};
pub use crate::error::{Result, StmtCountError as Error};
pub use crate::file_utils::{LineReader, open_lines};
pub use crate::reporting::render_diagnostic;
pub use crate::rule::Rule;
pub use crate::statement_count_rule::{StatementCount, StatementCountRule, Verdict};
