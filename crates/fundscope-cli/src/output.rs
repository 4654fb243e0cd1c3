//! Output formatting utilities.

use std::io::{IsTerminal, Write};

use colored::Colorize;
use fundscope_core::{format_amount, format_percentage, ExposureSummary};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// One property line of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct ExposureLine {
    #[tabled(rename = "Property")]
    pub property_type: String,
    #[tabled(rename = "Name")]
    pub property_name: String,
    #[tabled(rename = "Share")]
    pub percentage: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Total")]
    pub total: String,
}

impl ExposureLine {
    /// Builds the display lines of a summary, in result order.
    pub fn from_summary(summary: &ExposureSummary) -> Vec<Self> {
        let total = format_amount(summary.total());
        summary
            .rows()
            .into_iter()
            .map(|row| Self {
                percentage: format_percentage(row.amount, summary.total()),
                amount: format_amount(row.amount),
                total: total.clone(),
                property_type: row.property_type,
                property_name: row.property_name,
            })
            .collect()
    }
}

/// Full JSON report: the raw summary plus formatted lines.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a ExposureSummary,
    lines: Vec<ExposureLine>,
}

/// Writes a summary in the requested format.
pub fn print_summary<W: Write>(
    out: &mut W,
    summary: &ExposureSummary,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => write_text_report(out, summary)?,
        OutputFormat::Table => write_table(out, &ExposureLine::from_summary(summary))?,
        OutputFormat::Csv => write_csv(out, &ExposureLine::from_summary(summary))?,
        OutputFormat::Json => {
            let report = JsonReport {
                summary,
                lines: ExposureLine::from_summary(summary),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

/// Writes one section per property type.
///
/// ```text
///
/// Asset Class
/// -----------
/// Equity: 60.0%		(90.00 of 150.00)
/// ```
pub fn write_text_report<W: Write>(out: &mut W, summary: &ExposureSummary) -> std::io::Result<()> {
    let total = summary.total();

    for (property_type, names) in summary.properties() {
        writeln!(
            out,
            "\n{}\n{}",
            property_type,
            "-".repeat(property_type.chars().count())
        )?;

        for (name, amount) in names {
            writeln!(
                out,
                "{}: {}\t\t({} of {})",
                name,
                format_percentage(*amount, total),
                format_amount(*amount),
                format_amount(total)
            )?;
        }
    }
    Ok(())
}

/// Writes data as a formatted table.
fn write_table<W: Write, T: Tabled>(out: &mut W, data: &[T]) -> CliResult<()> {
    if data.is_empty() {
        writeln!(out, "No results.")?;
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    writeln!(out, "{}", table)?;
    Ok(())
}

/// Writes data as CSV.
fn write_csv<W: Write, T: Serialize>(out: &mut W, data: &[T]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats the warning for a fund missing from the configuration.
pub fn unmatched_message(fund: &str) -> String {
    format!("WARNING: COULD NOT FIND CONFIGURATION DATA FOR {fund}")
}

/// Prints a warning message to stderr, coloured only when stderr is a terminal.
pub fn print_warning(message: &str) {
    eprintln!("{}", styled_warning(message, std::io::stderr().is_terminal()));
}

/// Renders a warning, yellow when `color` is set.
fn styled_warning(message: &str, color: bool) -> String {
    if color {
        message.yellow().to_string()
    } else {
        message.to_string()
    }
}

/// Prints one warning per unmatched fund.
pub fn print_unmatched(funds: &[String]) {
    for fund in funds {
        print_warning(&unmatched_message(fund));
    }
}
