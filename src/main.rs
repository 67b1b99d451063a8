//! gitinclude CLI
//!
//! Command-line interface for generating keep-only .gitignore files.

use anyhow::Result;
use clap::Parser;
use gitinclude::cli::{commands, Cli};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let config = Cli::parse().into_config();

    // Execute the command
    commands::generate::execute(&config)
}
