//! Run configuration for gitinclude
//!
//! The only inputs are the two positional paths; logging is controlled
//! through `RUST_LOG`.

pub mod run_config;

// Re-export commonly used items
pub use run_config::{RunConfig, DEFAULT_OUTPUT_FILE};
