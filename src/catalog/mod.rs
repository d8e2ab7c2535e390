pub mod index;
pub mod normalize;
pub mod validate;

pub use index::CatalogIndex;
pub use normalize::normalize;
pub use validate::{validate_row, RowError, COLUMN_COUNT};

use crate::error::Result;
use crate::models::Ingredient;
use crate::source::{CatalogSource, SheetRange};

/// Fetch the raw rows for `range` and normalize them into the effective
/// catalog.
///
/// Any source failure or row validation failure is fatal to the whole
/// refresh; the previous catalog, if the caller kept one, is untouched. A
/// successful fetch fully replaces it.
pub fn fetch_catalog(source: &dyn CatalogSource, range: &SheetRange) -> Result<Vec<Ingredient>> {
    let rows = source.fetch(range)?;
    normalize(&rows, range.first_row)
}
