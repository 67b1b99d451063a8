//! Reading rules files and writing ignore files

use crate::core::error::{GitincludeError, Result};
use crate::core::types::RuleTable;
use crate::rules::parser::RuleParser;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Read and parse a rules file
pub fn read_rules(path: &Path) -> Result<RuleTable> {
    let file = File::open(path).map_err(|e| GitincludeError::cannot_open_input(path, e))?;

    let mut parser = RuleParser::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| GitincludeError::cannot_open_input(path, e))?;
        parser.feed(&line)?;
    }

    debug!(path = %path.display(), lines = parser.lines_read(), "read rules file");
    Ok(parser.finish())
}

/// Write pattern lines to an ignore file, replacing any existing content
pub fn write_patterns<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let to_write_error = |e| GitincludeError::cannot_write_output(path, e);

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(to_write_error)?;
    }
    writer.flush().map_err(to_write_error)?;

    debug!(path = %path.display(), lines = lines.len(), "wrote ignore file");
    Ok(())
}

/// Ignore-file content exactly as [`write_patterns`] writes it
pub fn render<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(line.as_ref());
        out.push('\n');
        out
    })
}
