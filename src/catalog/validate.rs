use thiserror::Error;

use crate::models::Ingredient;
use crate::source::RawRow;

/// Fixed column layout: name, pack quantity, pack price, availability flag.
pub const COLUMN_COUNT: usize = 4;

/// A rule violated by one raw row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("expected {COLUMN_COUNT} columns, found {0}")]
    ColumnCount(usize),

    #[error("pack quantity {0:?} is not a number")]
    PackQuantity(String),

    #[error("pack price {0:?} is not a number")]
    PackPrice(String),

    #[error("availability flag {0:?} is not TRUE or FALSE")]
    Availability(String),
}

/// Validate one raw row into an `Ingredient`.
///
/// Cell rules, left to right:
/// - name: taken as-is (blank names are filtered later, not rejected here)
/// - pack quantity: empty means 1; thousands-separator commas are stripped
/// - pack price: empty coerces to 0; no comma handling
/// - availability: exactly `TRUE` or `FALSE`, case-sensitive, untrimmed
///
/// Produces exactly one record or the first violated rule; never a partial
/// record.
pub fn validate_row(row: &RawRow) -> Result<Ingredient, RowError> {
    if row.len() != COLUMN_COUNT {
        return Err(RowError::ColumnCount(row.len()));
    }

    let name = row[0].clone();
    let pack_quantity = parse_pack_quantity(&row[1])?;
    let pack_price = parse_pack_price(&row[2])?;
    let available = parse_availability(&row[3])?;

    Ok(Ingredient {
        name,
        pack_price,
        pack_quantity,
        available,
    })
}

fn parse_pack_quantity(cell: &str) -> Result<f64, RowError> {
    if cell.is_empty() {
        return Ok(1.0);
    }

    cell.replace(',', "")
        .parse()
        .map_err(|_| RowError::PackQuantity(cell.to_string()))
}

fn parse_pack_price(cell: &str) -> Result<f64, RowError> {
    if cell.is_empty() {
        return Ok(0.0);
    }

    cell.parse().map_err(|_| RowError::PackPrice(cell.to_string()))
}

fn parse_availability(cell: &str) -> Result<bool, RowError> {
    match cell {
        "TRUE" => Ok(true),
        "FALSE" => Ok(false),
        other => Err(RowError::Availability(other.to_string())),
    }
}
