//! Command-line interface for gitinclude

use crate::config::RunConfig;
use clap::Parser;
use std::path::PathBuf;

pub mod commands;

/// gitinclude - build a .gitignore from a list of directories to keep
#[derive(Parser, Debug)]
#[command(
    name = "gitinclude",
    version,
    about = "Generate a .gitignore that keeps only the listed directories and extensions",
    long_about = "Reads a rules file with one `<path>[<ext>,<ext>,...]` rule per line and writes an ignore file that excludes everything except those paths, un-ignoring every ancestor directory along the way.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Rules file, one `<path>[<ext>,...]` rule per line
    pub rules: PathBuf,

    /// Ignore file to write (default: .gitignore)
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Resolve the run configuration from parsed arguments
    pub fn into_config(self) -> RunConfig {
        RunConfig::new(self.rules, self.output)
    }
}
