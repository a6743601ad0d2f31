//! The excluded-character test and the running tally of countable lines.

use std::io;

/// Characters whose presence anywhere in a line excludes it from the count.
pub const DEFAULT_EXCLUDED: [u8; 3] = [b'.', b':', b'#'];

/// Decides whether a line is statement-like.
///
/// The test is purely lexical: a line is countable when it contains none of
/// the excluded bytes, wherever they appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementFilter {
    excluded: Vec<u8>,
}

impl StatementFilter {
    /// Build a filter that excludes lines containing any of `excluded`.
    pub fn new(excluded: impl Into<Vec<u8>>) -> Self {
        StatementFilter {
            excluded: excluded.into(),
        }
    }

    /// The excluded bytes, in the order they were given.
    pub fn excluded(&self) -> &[u8] {
        &self.excluded
    }

    /// `true` if `line` contains none of the excluded bytes.
    pub fn is_countable(&self, line: &[u8]) -> bool {
        !line.iter().any(|b| self.excluded.contains(b))
    }
}

impl Default for StatementFilter {
    fn default() -> Self {
        StatementFilter::new(DEFAULT_EXCLUDED)
    }
}

/// Tally of countable lines over a single pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StmtCounter {
    /// Lines that passed the filter.
    pub count: u64,
    /// Lines visited so far. Always `>= count`.
    pub lines: u64,
}

impl StmtCounter {
    /// Create a new, empty `StmtCounter`.
    pub fn new() -> Self {
        StmtCounter { count: 0, lines: 0 }
    }

    /// Called once per line; bumps `count` if the line is countable.
    /// Returns whether it was.
    pub fn visit_line(&mut self, line: &[u8], filter: &StatementFilter) -> bool {
        self.lines += 1;
        let countable = filter.is_countable(line);
        if countable {
            self.count += 1;
        }
        countable
    }
}

/// Scan every line and tally the countable ones.
///
/// There is no early exit; the first read error aborts the scan.
pub fn count_statements<I>(lines: I, filter: &StatementFilter) -> io::Result<StmtCounter>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
{
    let mut counter = StmtCounter::new();
    for line in lines {
        let line = line?;
        if !counter.visit_line(&line, filter) {
            tracing::trace!(line_no = counter.lines, "Excluded line");
        }
    }
    Ok(counter)
}
