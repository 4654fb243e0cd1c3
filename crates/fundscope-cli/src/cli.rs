//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::SummarizeArgs;

/// Fundscope - Portfolio exposure by fund properties
#[derive(Parser)]
#[command(name = "fundscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true, env = "FUNDSCOPE_FORMAT")]
    pub format: OutputFormat,

    /// Suppress warnings about funds missing from the configuration
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate and summarize the properties of a portfolio
    Summarize(SummarizeArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text sections, one per property type
    #[default]
    Text,
    /// Human-readable table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
