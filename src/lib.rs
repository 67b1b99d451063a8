//! gitinclude - keep-only .gitignore generation
//!
//! gitinclude reads a short list of "keep" rules, each naming a directory and
//! the file extensions to retain inside it, and produces a `.gitignore` that
//! excludes everything else.
//!
//! Negated ignore patterns only take effect when every ancestor directory is
//! un-ignored too, so the generator registers each rule's ancestors before the
//! rule itself and emits them root to leaf.
//!
//! # Example Usage
//!
//! ```rust
//! use gitinclude::rules::{generate, parse_str};
//!
//! let table = parse_str("/src/bin/[*.rs]\n/[*.toml]\n")?;
//! let lines = generate(&table);
//!
//! assert_eq!(
//!     lines,
//!     ["*", "!/src/", "/src/*", "!/src/bin/", "/src/bin/*", "!/src/bin/*.rs", "!/*.toml"]
//! );
//! # Ok::<(), gitinclude::GitincludeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    error::{GitincludeError, Result},
    types::{Rule, RuleTable},
};

pub use crate::config::{RunConfig, DEFAULT_OUTPUT_FILE};

pub use crate::rules::{generate, parse_str, read_rules, write_patterns};

/// Current version of gitinclude
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
