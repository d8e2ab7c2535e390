use crate::pricing::constants::{SALES_TAX_RATE, STUDIO_SURCHARGE_RATE};
use crate::pricing::reconcile::MatchedItem;

/// The priced view of one reconciliation pass.
///
/// Derived deterministically from the matched set; recomputed on every
/// recipe or catalog change. Values are unrounded — formatting to currency
/// precision is the renderer's job.
#[derive(Debug, Clone)]
pub struct PricedBreakdown {
    pub ingredients_subtotal: f64,
    pub surcharge_amount: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// Price of one matched line: per-unit price scaled by the requested
/// quantity.
///
/// `pack_quantity` is never 0 here; the normalizer excludes such entries
/// before they can reach a match.
pub fn line_price(matched: &MatchedItem) -> f64 {
    matched.ingredient.unit_price() * matched.item.quantity
}

/// Sum of all line prices; 0 for an empty matched set.
pub fn ingredients_subtotal(matched: &[MatchedItem]) -> f64 {
    matched.iter().map(line_price).sum()
}

/// Derive the surcharge/tax breakdown from the matched set.
pub fn price_breakdown(matched: &[MatchedItem]) -> PricedBreakdown {
    let subtotal = ingredients_subtotal(matched);
    PricedBreakdown {
        ingredients_subtotal: subtotal,
        surcharge_amount: subtotal * STUDIO_SURCHARGE_RATE,
        tax_amount: subtotal * SALES_TAX_RATE,
        total: subtotal * (1.0 + STUDIO_SURCHARGE_RATE + SALES_TAX_RATE),
    }
}
