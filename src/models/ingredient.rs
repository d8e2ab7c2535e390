use serde::{Deserialize, Serialize};

/// A priceable catalog entry.
///
/// `name` is the identity key: case-sensitive, unique within the effective
/// catalog. Ingredients are rebuilt wholesale on every catalog fetch and are
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,

    /// Currency amount for one pack.
    pub pack_price: f64,

    /// Physical quantity per pack (e.g. grams). Positive for every
    /// business-valid entry.
    pub pack_quantity: f64,

    /// Whether the ingredient may be selected in a picker. Reconciliation
    /// and pricing ignore this flag.
    pub available: bool,
}

impl Ingredient {
    /// Price per single unit of `pack_quantity`.
    #[inline]
    pub fn unit_price(&self) -> f64 {
        self.pack_price / self.pack_quantity
    }

    /// Business validity: a non-blank name, a nonzero price, and a nonzero
    /// pack quantity. Structurally parseable rows failing this are excluded
    /// from the effective catalog rather than reported as errors.
    pub fn is_business_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.pack_price != 0.0 && self.pack_quantity != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ingredient() -> Ingredient {
        Ingredient {
            name: "Clay".to_string(),
            pack_price: 20.0,
            pack_quantity: 1000.0,
            available: true,
        }
    }

    #[test]
    fn test_unit_price() {
        let ingredient = sample_ingredient();
        assert!((ingredient.unit_price() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_business_validity() {
        assert!(sample_ingredient().is_business_valid());

        let mut blank_name = sample_ingredient();
        blank_name.name = "   ".to_string();
        assert!(!blank_name.is_business_valid());

        let mut free = sample_ingredient();
        free.pack_price = 0.0;
        assert!(!free.is_business_valid());

        let mut empty_pack = sample_ingredient();
        empty_pack.pack_quantity = 0.0;
        assert!(!empty_pack.is_business_valid());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample_ingredient()).unwrap();
        assert!(json.get("packPrice").is_some());
        assert!(json.get("packQuantity").is_some());
        assert!(json.get("available").is_some());
    }
}
