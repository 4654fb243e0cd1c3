//! CSV portfolio source.

use std::io::Read;
use std::path::{Path, PathBuf};

use fundscope_core::PortfolioRecord;
use tracing::{debug, warn};

use crate::error::{LoadError, LoadResult};

/// Header of the fund identifier column.
pub const FUND_COLUMN: &str = "fund";

/// Header of the amount column.
pub const AMOUNT_COLUMN: &str = "amount";

// =============================================================================
// CSV PORTFOLIO SOURCE
// =============================================================================

/// CSV-based portfolio source.
///
/// Lines starting with `#` are comments. The first remaining row is the
/// header; the `fund` and `amount` columns are located by name and may
/// appear anywhere among other columns. Rows may be shorter than the header.
#[derive(Debug, Clone)]
pub struct CsvPortfolioSource {
    file_path: PathBuf,
}

impl CsvPortfolioSource {
    /// Create a new CSV portfolio source.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Load all records from the file.
    ///
    /// A missing file loads as an empty portfolio.
    pub fn load(&self) -> LoadResult<Vec<PortfolioRecord>> {
        if !self.file_path.exists() {
            warn!(path = %self.file_path.display(), "portfolio file not found; using empty portfolio");
            return Ok(Vec::new());
        }

        let file = std::fs::File::open(&self.file_path)
            .map_err(|e| LoadError::io(&self.file_path, e))?;
        let records = parse_portfolio(file).map_err(|e| LoadError::csv(&self.file_path, e))?;

        debug!(
            path = %self.file_path.display(),
            records = records.len(),
            "portfolio loaded"
        );
        Ok(records)
    }
}

/// Parses portfolio CSV from any reader.
///
/// Cells that are not valid UTF-8 are decoded lossily rather than
/// rejecting the whole file.
pub fn parse_portfolio<R: Read>(reader: R) -> Result<Vec<PortfolioRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(reader);

    let headers = reader.byte_headers()?.clone();
    let fund_idx = column_index(&headers, FUND_COLUMN);
    let amount_idx = column_index(&headers, AMOUNT_COLUMN);

    if fund_idx.is_none() {
        warn!("portfolio has no '{FUND_COLUMN}' column; every row will be skipped");
    }
    if amount_idx.is_none() {
        warn!("portfolio has no '{AMOUNT_COLUMN}' column; every amount is missing");
    }

    let mut records = Vec::new();
    for result in reader.byte_records() {
        let row = result?;
        let field = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(|cell| String::from_utf8_lossy(cell).into_owned())
        };

        records.push(PortfolioRecord {
            fund: field(fund_idx),
            amount: field(amount_idx),
        });
    }

    Ok(records)
}

/// Position of the named column. Later duplicates win, as when a header row
/// is folded into a map.
fn column_index(headers: &csv::ByteRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| *header == name.as_bytes())
        .map(|(i, _)| i)
        .last()
}
