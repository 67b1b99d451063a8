//! Core types and utilities for gitinclude
//!
//! This module contains the rule table, path normalization, and error
//! handling used throughout the crate.

pub mod error;
pub mod path;
pub mod types;

// Re-export commonly used items
pub use error::{GitincludeError, Result};
pub use path::{normalize_dir_path, ROOT};
pub use types::{Declaration, Rule, RuleTable};
