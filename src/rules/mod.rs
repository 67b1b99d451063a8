//! Keep-rule processing
//!
//! A rules file lists the directories to keep and the file extensions to keep
//! inside each of them. This module parses those rules into an ordered
//! [`RuleTable`](crate::core::types::RuleTable) and turns the table into
//! `.gitignore` lines that exclude everything else.

pub mod file;
pub mod generator;
pub mod parser;

// Re-export commonly used items
pub use file::{read_rules, render, write_patterns};
pub use generator::generate;
pub use parser::{parse_line, parse_rules, parse_str, RuleParser};
