//! Per-run configuration resolved from the command line

use std::path::{Path, PathBuf};

/// Ignore file written when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = ".gitignore";

/// Input and output locations for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Rules file to read
    pub rules_path: PathBuf,
    /// Ignore file to create or overwrite
    pub output_path: PathBuf,
}

impl RunConfig {
    /// Build a config, falling back to [`DEFAULT_OUTPUT_FILE`]
    pub fn new(rules_path: impl Into<PathBuf>, output_path: Option<PathBuf>) -> Self {
        Self {
            rules_path: rules_path.into(),
            output_path: output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        }
    }

    /// Rules file to read
    pub fn rules_path(&self) -> &Path {
        &self.rules_path
    }

    /// Ignore file to write
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
