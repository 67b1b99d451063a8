//! Generate command implementation

use crate::config::RunConfig;
use crate::rules::{generate, read_rules, write_patterns};
use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

/// Execute the generate command
///
/// The output file is only opened once the whole rules file has parsed, so a
/// malformed rule never truncates an existing ignore file.
pub fn execute(config: &RunConfig) -> Result<()> {
    let table = read_rules(config.rules_path()).with_context(|| {
        format!(
            "Failed to load rules from {}",
            config.rules_path().display()
        )
    })?;
    debug!(entries = table.len(), "rule table ready");

    let lines = generate(&table);

    write_patterns(config.output_path(), &lines).with_context(|| {
        format!(
            "Failed to write ignore file {}",
            config.output_path().display()
        )
    })?;

    println!(
        "{} Wrote {} patterns to {}",
        "✓".green(),
        lines.len(),
        config.output_path().display().to_string().cyan()
    );

    Ok(())
}
