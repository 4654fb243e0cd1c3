//! Fundscope CLI - Portfolio exposure by fund properties.
//!
//! # Usage
//!
//! ```bash
//! # Summarize a portfolio with the default configuration
//! fundscope summarize portfolio.csv
//!
//! # Use another configuration and show only one property type
//! fundscope summarize portfolio.csv --config funds.json --filter "Asset Class"
//!
//! # Machine-readable output
//! fundscope --format json summarize portfolio.csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Execute command
    match cli.command {
        Commands::Summarize(args) => commands::summarize::execute(args, cli.format, cli.quiet)?,
    }

    Ok(())
}
