//! Error types for stmtcount.
//!
//! A threshold being exceeded is not an error; it is reported through
//! [`crate::statement_count_rule::Verdict`]. Malformed arguments are
//! rejected by clap before any of this code runs, so the only failure left
//! is I/O on the input file or the report.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The main error type for stmtcount operations.
#[derive(Debug)]
pub enum StmtCountError {
    /// An error occurred during file system operations.
    IoError {
        /// The operation being performed.
        operation: String,
        /// The path involved in the error.
        path: Option<PathBuf>,
        /// The underlying IO error.
        source: Option<io::Error>,
    },
}

impl StmtCountError {
    /// Creates a new `IoError` with a path and underlying error.
    ///
    /// # Arguments
    /// * `operation` - A description of the IO operation being performed.
    /// * `path` - The path involved in the error.
    /// * `source` - The underlying IO error.
    ///
    /// # Examples
    /// ```
    /// use std::io;
    /// use std::path::PathBuf;
    /// use stmtcount_core::error::StmtCountError;
    ///
    /// let err = StmtCountError::io_error_with_source(
    ///     "open file",
    ///     PathBuf::from("notes.txt"),
    ///     io::Error::new(io::ErrorKind::NotFound, "missing"),
    /// );
    /// assert_eq!(err.name(), "IoError");
    /// ```
    pub fn io_error_with_source(
        operation: impl Into<String>,
        path: PathBuf,
        source: io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Returns the name of the error variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IoError { .. } => "IoError",
        }
    }

    /// Returns suggested recovery actions for the error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IoError {
                operation, source, ..
            } => {
                let mut s = vec![
                    "Check that the path exists and is accessible".to_string(),
                    "Verify you have the necessary permissions".to_string(),
                ];
                if source
                    .as_ref()
                    .is_some_and(|e| e.kind() == io::ErrorKind::IsADirectory)
                {
                    s.push("Pass a regular file, not a directory".to_string());
                } else if operation.contains("read") || operation.contains("open") {
                    s.push("Ensure the file is not locked by another process".to_string());
                }
                s
            }
        }
    }
}

impl fmt::Display for StmtCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError {
                operation, path, ..
            } => {
                if let Some(p) = path {
                    write!(
                        f,
                        "IO error during '{}' at '{}': operation failed",
                        operation,
                        p.display()
                    )
                } else {
                    write!(f, "IO error during '{}': operation failed", operation)
                }
            }
        }
    }
}

impl std::error::Error for StmtCountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => source.as_ref().map(|e| e as _),
        }
    }
}

/// A type alias for `Result<T, StmtCountError>`.
pub type Result<T> = std::result::Result<T, StmtCountError>;
