use serde::{Deserialize, Serialize};

/// One line of a recipe: an ingredient name and a requested quantity.
///
/// The quantity is expressed in the same physical unit as the ingredient's
/// `pack_quantity`. The name is a plain lookup key, not a reference; whether
/// it resolves is decided at reconciliation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeItem {
    pub ingredient_name: String,
    pub quantity: f64,
}

/// An ordered list of recipe items, unique by ingredient name.
#[derive(Debug, Clone, Default)]
pub struct Recipe {
    items: Vec<RecipeItem>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, replacing any existing item with the same name.
    ///
    /// The replacement is appended, so a re-added ingredient moves to the
    /// end of the recipe.
    pub fn add(&mut self, item: RecipeItem) {
        self.items
            .retain(|existing| existing.ingredient_name != item.ingredient_name);
        self.items.push(item);
    }

    /// Remove the item with the given name. Returns whether one was removed.
    pub fn remove(&mut self, ingredient_name: &str) -> bool {
        let before = self.items.len();
        self.items
            .retain(|item| item.ingredient_name != ingredient_name);
        self.items.len() < before
    }

    pub fn items(&self) -> &[RecipeItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Build a recipe from a plain item list, collapsing duplicate names.
///
/// Later entries win, matching `add` semantics.
impl FromIterator<RecipeItem> for Recipe {
    fn from_iter<I: IntoIterator<Item = RecipeItem>>(iter: I) -> Self {
        let mut recipe = Recipe::new();
        for item in iter {
            recipe.add(item);
        }
        recipe
    }
}
