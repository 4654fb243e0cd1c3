//! Summarize command implementation.
//!
//! Aggregates a portfolio CSV against a fund property configuration and
//! reports the weighted exposure by property type.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use fundscope_core::{summarize, summarize_strict, ExposureSummary};
use fundscope_ext_file::{read_config, read_portfolio};

use crate::cli::OutputFormat;
use crate::commands::DEFAULT_CONFIG_PATH;
use crate::error::CliResult;
use crate::output::{print_summary, print_unmatched};

/// Arguments for the summarize command.
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Portfolio CSV file with `fund` and `amount` columns
    pub portfolio: PathBuf,

    /// Fund property configuration (JSON)
    #[arg(short, long, env = "FUNDSCOPE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Only display the given property type
    #[arg(short, long, value_name = "NAME")]
    pub filter: Option<String>,

    /// Fail on non-numeric amounts or weights instead of tolerating them
    #[arg(long)]
    pub strict: bool,
}

/// Execute the summarize command.
pub fn execute(args: SummarizeArgs, format: OutputFormat, quiet: bool) -> CliResult<()> {
    let records = read_portfolio(&args.portfolio)?;
    let config = read_config(&args.config)?;

    info!(
        portfolio = %args.portfolio.display(),
        config = %args.config.display(),
        records = records.len(),
        funds = config.len(),
        "summarizing portfolio"
    );

    let summary = if args.strict {
        summarize_strict(&records, &config)?
    } else {
        summarize(&records, &config)
    };

    let summary = apply_filter(summary, args.filter.as_deref());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_summary(&mut out, &summary, format)?;

    let text = format == OutputFormat::Text;
    if !quiet && !summary.unmatched().is_empty() {
        if text {
            writeln!(out, "\n")?;
        }
        out.flush()?;
        print_unmatched(summary.unmatched());
    }
    if text {
        writeln!(out, "\n")?;
    }

    Ok(())
}

/// Restricts the displayed property types; aggregation is unaffected.
fn apply_filter(summary: ExposureSummary, filter: Option<&str>) -> ExposureSummary {
    let Some(property_type) = filter else {
        return summary;
    };

    let filtered = summary.filtered(property_type);
    if filtered.is_empty() && !summary.is_empty() {
        let available: Vec<_> = summary.property_types().collect();
        warn!(
            filter = property_type,
            available = ?available,
            "no property type matches the filter"
        );
    }
    filtered
}
