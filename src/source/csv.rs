use std::path::{Path, PathBuf};

use crate::error::{PricerError, Result};
use crate::source::{CatalogSource, RawRow, SheetRange};

/// Catalog source backed by a local CSV export of the price sheet.
///
/// The file mirrors the sheet row for row, header included, so the range's
/// row numbers apply directly: `first_row` 2 skips the header line.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for CsvSource {
    fn fetch(&self, range: &SheetRange) -> Result<Vec<RawRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| source_error(&self.path, range, e))?;

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let row_number = i + 1;
            if row_number < range.first_row {
                continue;
            }
            if row_number > range.last_row {
                break;
            }

            let record = record.map_err(|e| source_error(&self.path, range, e))?;
            let row: RawRow = record
                .iter()
                .take(range.columns)
                .map(|cell| cell.to_string())
                .collect();
            rows.push(row);
        }

        Ok(rows)
    }
}

fn source_error(path: &Path, range: &SheetRange, error: impl std::fmt::Display) -> PricerError {
    PricerError::SourceFetch(format!(
        "{} from {}: {}",
        range.to_a1(),
        path.display(),
        error
    ))
}
