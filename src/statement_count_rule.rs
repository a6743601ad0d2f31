//! The statement count check: scan a file, compare against a threshold.

use serde::Serialize;
use std::io;
use std::path::PathBuf;

use crate::cli::StatementCountArgs;
use crate::counter::{StatementFilter, count_statements};
use crate::error::{Result, StmtCountError};
use crate::file_utils::open_lines;
use crate::reporting::print_report;
use crate::rule::Rule;

/// Result of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementCount {
    /// The file that was scanned.
    pub path: PathBuf,
    /// Number of countable lines.
    pub count: u64,
    /// Number of lines scanned.
    pub lines: u64,
    /// The threshold the count is compared against.
    pub threshold: i128,
}

impl StatementCount {
    /// `true` when `count > threshold`. Equal is still within.
    pub fn exceeds_threshold(&self) -> bool {
        i128::from(self.count) > self.threshold
    }

    /// The verdict this count implies.
    pub fn verdict(&self) -> Verdict {
        if self.exceeds_threshold() {
            Verdict::Exceeded { count: self.count }
        } else {
            Verdict::WithinThreshold
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The count is at or below the threshold.
    WithinThreshold,
    /// The count is above the threshold.
    Exceeded {
        /// The number of countable lines.
        count: u64,
    },
}

impl Verdict {
    /// Process exit code for this verdict: 0 within, 1 exceeded.
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::WithinThreshold => 0,
            Verdict::Exceeded { .. } => 1,
        }
    }
}

/// Rule to count statement-like lines in a file and check against a threshold.
#[derive(Debug, Default)]
pub struct StatementCountRule {
    filter: StatementFilter,
}

impl StatementCountRule {
    /// A rule using the default `.`, `:`, `#` filter.
    pub fn new() -> Self {
        StatementCountRule::default()
    }

    /// A rule using a custom filter.
    pub fn with_filter(filter: StatementFilter) -> Self {
        StatementCountRule { filter }
    }

    /// Like [`Rule::run`], writing the diagnostic to `out` instead of stdout.
    pub fn run_with_output<W: io::Write>(
        &self,
        args: &StatementCountArgs,
        out: &mut W,
    ) -> Result<Verdict> {
        let report = self.analyze(args)?;
        print_report(out, &report).map_err(|e| StmtCountError::IoError {
            operation: "write report".to_string(),
            path: None,
            source: Some(e),
        })?;
        Ok(report.verdict())
    }
}

impl Rule for StatementCountRule {
    type Config = StatementCountArgs;
    type Data = StatementCount;
    type Outcome = Verdict;

    fn name() -> &'static str {
        "statement_count"
    }

    fn description() -> &'static str {
        "Counts lines containing none of '.', ':' or '#' and fails above a threshold"
    }

    #[tracing::instrument(level = "debug", skip_all, fields(path = %args.path.display(), threshold = %args.threshold))]
    fn run(&self, args: &StatementCountArgs) -> Result<Verdict> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(args, &mut out)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(path = %args.path.display()), err(level = "debug"))]
    fn analyze(&self, args: &StatementCountArgs) -> Result<StatementCount> {
        let lines = open_lines(&args.path)?;
        tracing::debug!("Opened input file");

        let counter = count_statements(lines, &self.filter).map_err(|e| {
            StmtCountError::io_error_with_source("read file", args.path.clone(), e)
        })?;

        tracing::info!(
            count = counter.count,
            lines = counter.lines,
            threshold = %args.threshold,
            "Finished scanning"
        );

        Ok(StatementCount {
            path: args.path.clone(),
            count: counter.count,
            lines: counter.lines,
            threshold: args.threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    fn run(contents: &str, threshold: i128) -> (Verdict, String) {
        let file = file_with(contents);
        let args = StatementCountArgs {
            path: file.path().to_path_buf(),
            threshold,
        };
        let mut out = Vec::new();
        let verdict = StatementCountRule::new()
            .run_with_output(&args, &mut out)
            .expect("run succeeds");
        (verdict, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn test_three_plain_lines_exceed_two() {
        let (verdict, out) = run("a\nb\nc\n", 2);
        assert_eq!(verdict, Verdict::Exceeded { count: 3 });
        assert_eq!(verdict.exit_code(), 1);
        assert_eq!(out, "Counted 3 statements\n");
    }

    #[test]
    fn test_dotted_line_is_not_counted() {
        let (verdict, out) = run("a\nb.c\n", 1);
        assert_eq!(verdict, Verdict::WithinThreshold);
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_file_is_within_zero() {
        let (verdict, out) = run("", 0);
        assert_eq!(verdict.exit_code(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_colon_and_hash_lines_are_not_counted() {
        let (verdict, _) = run("x:y\n#comment\nplain\n", 1);
        assert_eq!(verdict, Verdict::WithinThreshold);
    }

    #[test]
    fn test_negative_threshold_is_exceeded_by_empty_file() {
        let (verdict, out) = run("", -1);
        assert_eq!(verdict, Verdict::Exceeded { count: 0 });
        assert_eq!(out, "Counted 0 statements\n");
    }

    #[test]
    fn test_threshold_beyond_i64_is_never_exceeded() {
        let (verdict, out) = run("a\nb\n", i128::from(i64::MAX) + 1);
        assert_eq!(verdict, Verdict::WithinThreshold);
        assert!(out.is_empty());
    }

    #[test]
    fn test_extreme_counts_and_thresholds() {
        let report = StatementCount {
            path: PathBuf::from("input.txt"),
            count: u64::MAX,
            lines: u64::MAX,
            threshold: i128::from(u64::MAX),
        };
        assert!(!report.exceeds_threshold());
        assert!(StatementCount { threshold: i128::MIN, ..report }.exceeds_threshold());
    }

    #[test]
    fn test_analyze_reports_counts() {
        let file = file_with("one\ntwo.\nthree\n");
        let args = StatementCountArgs {
            path: file.path().to_path_buf(),
            threshold: 5,
        };
        let report = StatementCountRule::new().analyze(&args).expect("analyze");
        assert_eq!(report.count, 2);
        assert_eq!(report.lines, 3);
        assert!(!report.exceeds_threshold());
    }

    #[test]
    fn test_analyze_with_custom_filter() {
        let file = file_with("a;\nb.c\n");
        let args = StatementCountArgs {
            path: file.path().to_path_buf(),
            threshold: 0,
        };
        let rule = StatementCountRule::with_filter(StatementFilter::new(*b";"));
        assert_eq!(rule.analyze(&args).expect("analyze").count, 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let args = StatementCountArgs {
            path: dir.path().join("nope.txt"),
            threshold: 0,
        };
        let mut out = Vec::new();
        let err = StatementCountRule::new()
            .run_with_output(&args, &mut out)
            .expect_err("missing file must fail");
        assert_eq!(err.name(), "IoError");
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let report = StatementCount {
            path: PathBuf::from("input.txt"),
            count: 3,
            lines: 4,
            threshold: 2,
        };
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"path": "input.txt", "count": 3, "lines": 4, "threshold": 2})
        );
    }

    #[test]
    fn test_rule_identity() {
        assert_eq!(StatementCountRule::name(), "statement_count");
        assert!(StatementCountRule::description().contains("threshold"));
    }
}
