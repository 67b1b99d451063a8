//! Ignore-pattern generation from a rule table

use crate::core::path::is_root;
use crate::core::types::RuleTable;
use tracing::debug;

/// First line of every generated file
pub const EXCLUDE_ALL: &str = "*";

/// Prefix that re-includes a pattern
pub const NEGATE: char = '!';

/// Generate the ignore-file lines for a rule table
///
/// Output starts with [`EXCLUDE_ALL`]. Every directory in table order gets a
/// `!<dir>` / `<dir>*` pair, except the root which is never excluded in the
/// first place. Each explicit rule's `!<dir><ext>` lines follow once all the
/// directories registered up to that rule have their pairs.
pub fn generate(table: &RuleTable) -> Vec<String> {
    let mut lines = vec![EXCLUDE_ALL.to_string()];
    let mut emitted = 0;

    for declaration in table.declarations() {
        emit_directories(table, &mut emitted, declaration.horizon, &mut lines);

        if let Some((path, Some(extensions))) = table.get_index(declaration.index) {
            lines.extend(
                extensions
                    .iter()
                    .map(|ext| format!("{NEGATE}{path}{ext}")),
            );
        }
    }
    emit_directories(table, &mut emitted, table.len(), &mut lines);

    debug!(
        entries = table.len(),
        lines = lines.len(),
        "generated ignore patterns"
    );
    lines
}

/// Emit directory pairs for table entries `emitted..until`
fn emit_directories(table: &RuleTable, emitted: &mut usize, until: usize, lines: &mut Vec<String>) {
    while *emitted < until {
        if let Some((path, _)) = table.get_index(*emitted) {
            if !is_root(path) {
                lines.push(format!("{NEGATE}{path}"));
                lines.push(format!("{path}{EXCLUDE_ALL}"));
            }
        }
        *emitted += 1;
    }
}
