//! Opening the input file and reading it one line at a time.

use crate::error::{Result, StmtCountError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A lazy, single-pass iterator over the lines of a buffered reader.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`; yielded lines do not include
/// the terminator. Trailing bytes after the last terminator form a final line.
/// Lines are raw bytes, so input that is not valid UTF-8 is still scanned.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    // The previous line ended at `\r`; a `\n` right after it is part of that terminator.
    skip_lf: bool,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap `inner` so it yields one line per `next()`.
    pub fn new(inner: R) -> Self {
        LineReader {
            inner,
            skip_lf: false,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = Vec::new();
        loop {
            let buf = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            if buf.is_empty() {
                self.done = true;
                return if line.is_empty() { None } else { Some(Ok(line)) };
            }

            if self.skip_lf {
                self.skip_lf = false;
                if buf[0] == b'\n' {
                    self.inner.consume(1);
                    continue;
                }
            }

            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.skip_lf = buf[end] == b'\r';
                    line.extend_from_slice(&buf[..end]);
                    self.inner.consume(end + 1);
                    return Some(Ok(line));
                }
                None => {
                    let len = buf.len();
                    line.extend_from_slice(buf);
                    self.inner.consume(len);
                }
            }
        }
    }
}

/// Open `path` for reading and return a lazy line iterator over it.
///
/// The file handle lives inside the returned reader and is closed when the
/// reader is dropped, whether the scan finished or failed.
///
/// # Returns
/// - `Ok(LineReader)` when the file could be opened.
/// - `Err(StmtCountError::IoError)` if it is missing, unreadable or a directory.
pub fn open_lines(path: &Path) -> Result<LineReader<BufReader<File>>> {
    let file = File::open(path)
        .map_err(|e| StmtCountError::io_error_with_source("open file", path.to_path_buf(), e))?;

    // On Unix a directory opens fine and only fails on the first read.
    let is_dir = file
        .metadata()
        .map_err(|e| StmtCountError::io_error_with_source("open file", path.to_path_buf(), e))?
        .is_dir();
    if is_dir {
        return Err(StmtCountError::io_error_with_source(
            "open file",
            path.to_path_buf(),
            io::Error::new(io::ErrorKind::IsADirectory, "path is a directory"),
        ));
    }

    Ok(LineReader::new(BufReader::new(file)))
}
