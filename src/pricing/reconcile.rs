use crate::catalog::CatalogIndex;
use crate::models::{Ingredient, RecipeItem};

/// A recipe item paired with the catalog entry it resolved to.
///
/// Transient: borrows both sides and is recomputed from the current
/// (catalog, recipe) snapshot, never stored.
#[derive(Debug, Clone, Copy)]
pub struct MatchedItem<'a> {
    pub item: &'a RecipeItem,
    pub ingredient: &'a Ingredient,
}

/// The two-way partition of a recipe against a catalog.
#[derive(Debug, Default)]
pub struct Reconciliation<'a> {
    pub matched: Vec<MatchedItem<'a>>,
    pub unmatched: Vec<&'a RecipeItem>,
}

/// Partition recipe items into matched and unmatched by name lookup.
///
/// Every input item lands in exactly one of the two outputs; relative order
/// is preserved within each. An unmatched item is a normal outcome for the
/// caller to display, not an error. Availability is not consulted here.
pub fn reconcile<'a>(index: &'a CatalogIndex, items: &'a [RecipeItem]) -> Reconciliation<'a> {
    let mut result = Reconciliation::default();
    for item in items {
        match index.get(&item.ingredient_name) {
            Some(ingredient) => result.matched.push(MatchedItem { item, ingredient }),
            None => result.unmatched.push(item),
        }
    }
    result
}
