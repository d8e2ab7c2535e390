use std::collections::HashMap;

use crate::models::Ingredient;

/// Name-keyed lookup over the effective catalog.
///
/// Keys are exact, case-sensitive names. When the catalog lists the same
/// name twice, the later entry overwrites the earlier one — a deliberate
/// simplification, not an error.
pub struct CatalogIndex {
    ingredients: HashMap<String, Ingredient>,
}

impl CatalogIndex {
    /// Build the index in catalog order (last write wins on duplicates).
    pub fn new(catalog: Vec<Ingredient>) -> Self {
        let mut ingredients = HashMap::new();
        for ingredient in catalog {
            ingredients.insert(ingredient.name.clone(), ingredient);
        }
        Self { ingredients }
    }

    /// Look up an ingredient by exact name. A miss is a normal outcome.
    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    /// Ingredients a picker may offer (`available == true`).
    pub fn selectable(&self) -> Vec<&Ingredient> {
        self.ingredients.values().filter(|i| i.available).collect()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
