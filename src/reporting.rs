//! Threshold diagnostics.

use std::io::{self, Write};

use crate::statement_count_rule::StatementCount;

/// The diagnostic line printed when the threshold is exceeded.
pub fn render_diagnostic(count: u64) -> String {
    format!("Counted {count} statements")
}

/// Write the diagnostic for `report` to `out` if its count is over the threshold.
///
/// Returns `true` when something was written.
pub fn print_report<W: Write>(out: &mut W, report: &StatementCount) -> io::Result<bool> {
    if !report.exceeds_threshold() {
        return Ok(false);
    }
    writeln!(out, "{}", render_diagnostic(report.count))?;
    out.flush()?;
    Ok(true)
}
