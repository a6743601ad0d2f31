//! Rule Trait
//!
//! This module defines the [`Rule`] trait, the interface a threshold check
//! implements in stmtcount. A rule is split in two halves:
//!
//! - [`Rule::analyze`] gathers data and produces no output
//! - [`Rule::run`] analyzes, reports, and decides the [`Rule::Outcome`]
//!
//! Keeping `analyze` output-free lets library callers inspect the data
//! without the side effects the binary needs.

use crate::error::Result;
use serde::Serialize;
use std::fmt::Debug;

/// Common trait for analysis rules.
pub trait Rule: Sized {
    /// The configuration this rule accepts, usually built from CLI arguments.
    type Config: Clone + Debug + Send + Sync;

    /// The structured data returned by [`Rule::analyze`].
    type Data: Debug + Send + Sync + Serialize;

    /// What a completed run decided. Failing a threshold is an outcome, not an error.
    type Outcome: Debug;

    /// Returns the name of this rule, a unique snake_case string used in logs.
    fn name() -> &'static str;

    /// Returns a human-readable description of this rule.
    fn description() -> &'static str;

    /// Runs the rule with the given configuration and outputs results.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::StmtCountError`] if the input cannot be read
    /// or the report cannot be written.
    fn run(&self, config: &Self::Config) -> Result<Self::Outcome>;

    /// Analyzes the input and returns structured data without producing output.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::StmtCountError`] if the analysis cannot be completed.
    fn analyze(&self, config: &Self::Config) -> Result<Self::Data>;
}
