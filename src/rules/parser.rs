//! Rules file parser
//!
//! Each line has the form `<path>[<ext>,<ext>,...]`. Whitespace anywhere on
//! the line is ignored and blank lines are skipped.

use crate::core::error::{GitincludeError, Result};
use crate::core::types::{Rule, RuleTable};
use tracing::debug;

/// Incremental parser that builds a [`RuleTable`] line by line
#[derive(Debug, Default)]
pub struct RuleParser {
    table: RuleTable,
    line_number: usize,
}

impl RuleParser {
    /// Create a parser with an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the next line and apply it to the table
    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;
        if let Some(rule) = parse_line(self.line_number, line)? {
            self.table.insert_rule(rule);
        }
        Ok(())
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Finish parsing and hand over the table
    pub fn finish(self) -> RuleTable {
        debug!(
            lines = self.line_number,
            entries = self.table.len(),
            "parsed rules"
        );
        self.table
    }
}

/// Parse a sequence of rule lines into a table
pub fn parse_rules<I, S>(lines: I) -> Result<RuleTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = RuleParser::new();
    for line in lines {
        parser.feed(line.as_ref())?;
    }
    Ok(parser.finish())
}

/// Parse rules from a string
pub fn parse_str(content: &str) -> Result<RuleTable> {
    parse_rules(content.lines())
}

/// Parse a single rules-file line
///
/// Returns `Ok(None)` for lines that are empty once whitespace is removed.
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Rule>> {
    let cleaned: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Ok(None);
    }

    let (path, extensions) = split_rule(&cleaned)
        .map_err(|reason| GitincludeError::malformed_rule(line_number, line, reason))?;

    Ok(Some(Rule::new(
        path,
        extensions.split(',').filter(|ext| !ext.is_empty()),
    )))
}

/// Split a cleaned line into its path and the text between the brackets
fn split_rule(cleaned: &str) -> std::result::Result<(&str, &str), &'static str> {
    let (path, bracketed) = cleaned
        .rsplit_once('[')
        .ok_or("missing '[' before the extension list")?;

    let extensions = bracketed
        .strip_suffix(']')
        .ok_or("extension list must end with ']'")?;

    if path.is_empty() {
        return Err("missing directory path before '['");
    }

    Ok((path, extensions))
}
