/// Studio surcharge rate applied to the ingredients subtotal.
pub const STUDIO_SURCHARGE_RATE: f64 = 0.10;

/// Sales tax rate applied to the ingredients subtotal.
pub const SALES_TAX_RATE: f64 = 0.05;
