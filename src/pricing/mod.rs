pub mod breakdown;
pub mod constants;
pub mod reconcile;

pub use breakdown::{ingredients_subtotal, line_price, price_breakdown, PricedBreakdown};
pub use constants::{SALES_TAX_RATE, STUDIO_SURCHARGE_RATE};
pub use reconcile::{reconcile, MatchedItem, Reconciliation};
