//! Error types for gitinclude

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rule parsing and ignore-file generation
#[derive(Error, Debug)]
pub enum GitincludeError {
    /// The rules file could not be opened or read
    #[error("Cannot open input {}: {source}", path.display())]
    CannotOpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rules-file line did not match `<path>[<ext>,...]`
    #[error("Malformed rule line {line_number}: '{line}' ({reason})")]
    MalformedRule {
        line_number: usize,
        line: String,
        reason: String,
    },

    /// The ignore file could not be created or written
    #[error("Cannot write output {}: {source}", path.display())]
    CannotWriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GitincludeError {
    /// Create a new cannot open input error
    pub fn cannot_open_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CannotOpenInput {
            path: path.into(),
            source,
        }
    }

    /// Create a new malformed rule error
    pub fn malformed_rule(
        line_number: usize,
        line: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRule {
            line_number,
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a new cannot write output error
    pub fn cannot_write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CannotWriteOutput {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for gitinclude operations
pub type Result<T> = std::result::Result<T, GitincludeError>;
