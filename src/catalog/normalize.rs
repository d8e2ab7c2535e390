use crate::catalog::validate::validate_row;
use crate::error::{PricerError, Result};
use crate::models::Ingredient;
use crate::source::RawRow;

/// Normalize raw rows into the effective catalog.
///
/// Validation is all-or-nothing: the first row that fails aborts the whole
/// normalization, reported with its absolute sheet row number (`first_row`
/// is the number of the first raw row). The business-validity filter that
/// follows is the opposite — row-by-row and lossy by design: zero-price,
/// zero-quantity, and blank-name entries are dropped silently, preserving
/// the order of the rest. Duplicate names survive; the index resolves them.
pub fn normalize(rows: &[RawRow], first_row: usize) -> Result<Vec<Ingredient>> {
    let mut ingredients = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let ingredient = validate_row(row).map_err(|source| PricerError::Row {
            row: first_row + i,
            source,
        })?;
        ingredients.push(ingredient);
    }

    Ok(ingredients
        .into_iter()
        .filter(Ingredient::is_business_valid)
        .collect())
}
