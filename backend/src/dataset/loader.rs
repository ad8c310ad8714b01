//! Startup ingestion of the source table.
//!
//! Reads the delimited file once, keeps only rows at the subnational
//! administrative level, renames the raw metric columns to their display
//! labels (see [`super::METRIC_COLUMNS`]) and hands the rows to
//! [`Dataset::new`]. Any problem (missing file, missing column, a cell that
//! fails to parse) is returned as an error and aborts startup; there are no
//! partial-load semantics.

use std::path::Path;

use super::{Dataset, Record, METRIC_COLUMNS};

const LEVEL_COLUMN: &str = "level";
const COUNTRY_COLUMN: &str = "country";
const REGION_COLUMN: &str = "region";
const YEAR_COLUMN: &str = "year";

/// Only rows at this administrative level enter the dataset; national
/// aggregates are dropped.
const LEVEL_SUBNATIONAL: &str = "Subnational";

pub fn load(path: &Path) -> Result<Dataset, String> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| format!("Cannot open {}: {}", path.display(), e))?;
    let headers = reader.headers().map_err(|e| e.to_string())?.clone();

    let column = |name: &str| -> Result<usize, String> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("Missing column '{}' in {}", name, path.display()))
    };

    let level_col = column(LEVEL_COLUMN)?;
    let country_col = column(COUNTRY_COLUMN)?;
    let region_col = column(REGION_COLUMN)?;
    let year_col = column(YEAR_COLUMN)?;
    let mut metric_cols = Vec::with_capacity(METRIC_COLUMNS.len());
    for (raw, _) in METRIC_COLUMNS {
        metric_cols.push(column(raw)?);
    }

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = result.map_err(|e| e.to_string())?;
        if row.get(level_col).unwrap_or("").trim() != LEVEL_SUBNATIONAL {
            continue;
        }

        let year_cell = row.get(year_col).unwrap_or("").trim();
        let year = year_cell.parse::<i32>().map_err(|_| {
            // +2: header line plus 1-based numbering
            format!("Row {}: invalid year '{}'", idx + 2, year_cell)
        })?;

        let mut values = Vec::with_capacity(metric_cols.len());
        for (&col, (raw, _)) in metric_cols.iter().zip(METRIC_COLUMNS) {
            values.push(parse_metric_cell(row.get(col).unwrap_or(""), idx, raw)?);
        }

        records.push(Record {
            country: row.get(country_col).unwrap_or("").trim().to_string(),
            region: row.get(region_col).unwrap_or("").trim().to_string(),
            year,
            values,
        });
    }

    Ok(Dataset::new(records))
}

/// An empty cell is a missing value; anything else must parse as a number.
fn parse_metric_cell(cell: &str, idx: usize, column: &str) -> Result<Option<f64>, String> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(|_| {
        format!(
            "Row {}, column '{}': '{}' is not a number",
            idx + 2,
            column,
            cell
        )
    })
}
