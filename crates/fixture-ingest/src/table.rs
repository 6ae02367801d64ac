//! Tabular source: the ucum.org table of example codes, read from its CSV
//! export.
//!
//! Column layout is positional: `[0]` the table's own row number, `[1]` the
//! UCUM code, `[2]` the description. A fixed count of leading rows (title
//! plus column headers) is dropped before data starts.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use fixture_model::{FixtureError, Result};

/// Leading rows dropped by default: the title row and the header row.
pub const DEFAULT_SKIP_ROWS: usize = 2;

/// One data row from the example-code table, untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRow {
    /// The table's own row number, reused verbatim as the fixture id suffix.
    pub row: u64,
    /// UCUM expression. May be blank; blank codes are dropped downstream.
    pub code: String,
    /// Unit description.
    pub description: String,
}

/// Read all data rows beyond the skip count, in original row order.
///
/// Fully blank lines are dropped here. Rows whose code cell is blank are
/// kept so the transform can count them as skipped.
///
/// # Errors
///
/// `SourceNotFound` for a missing file, `Parse` for unreadable CSV, and
/// `Schema` when a data row lacks the expected columns or carries a
/// non-numeric row number.
pub fn read_example_rows(path: &Path, skip_rows: usize) -> Result<Vec<ExampleRow>> {
    let contents = crate::read_source(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|error| FixtureError::parse(path, error.to_string()))?;
        if index < skip_rows {
            continue;
        }
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(parse_row(path, index + 1, &record)?);
    }
    debug!(path = %path.display(), rows = rows.len(), "read example table");
    Ok(rows)
}

fn parse_row(path: &Path, line: usize, record: &csv::StringRecord) -> Result<ExampleRow> {
    let number = record
        .get(0)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .ok_or_else(|| FixtureError::schema(path, format!("line {line}: missing row number")))?;
    let row = number.parse::<u64>().map_err(|_| {
        FixtureError::schema(
            path,
            format!("line {line}: row number {number:?} is not numeric"),
        )
    })?;

    let code = record.get(1).unwrap_or("").to_string();
    let description = match record.get(2) {
        Some(cell) => cell.to_string(),
        None if code.trim().is_empty() => String::new(),
        None => {
            return Err(FixtureError::schema(
                path,
                format!("line {line}: missing description column"),
            ));
        }
    };

    Ok(ExampleRow {
        row,
        code,
        description,
    })
}
