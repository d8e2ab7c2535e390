use assert_float_eq::*;

use recipe_pricer_rs::catalog::CatalogIndex;
use recipe_pricer_rs::models::{Ingredient, Recipe, RecipeItem};
use recipe_pricer_rs::pricing::{ingredients_subtotal, price_breakdown, reconcile};

fn make_ingredient(name: &str, pack_price: f64, pack_quantity: f64) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        pack_price,
        pack_quantity,
        available: true,
    }
}

fn make_item(name: &str, quantity: f64) -> RecipeItem {
    RecipeItem {
        ingredient_name: name.to_string(),
        quantity,
    }
}

#[test]
fn test_clay_example_breakdown() {
    let index = CatalogIndex::new(vec![make_ingredient("Clay", 20.0, 1000.0)]);
    let items = vec![make_item("Clay", 250.0)];

    let reconciliation = reconcile(&index, &items);
    assert_eq!(reconciliation.matched.len(), 1);
    assert!(reconciliation.unmatched.is_empty());

    let breakdown = price_breakdown(&reconciliation.matched);
    assert_float_absolute_eq!(breakdown.ingredients_subtotal, 5.0, 1e-9);
    assert_float_absolute_eq!(breakdown.surcharge_amount, 0.5, 1e-9);
    assert_float_absolute_eq!(breakdown.tax_amount, 0.25, 1e-9);
    assert_float_absolute_eq!(breakdown.total, 5.75, 1e-9);
}

#[test]
fn test_partition_law() {
    let index = CatalogIndex::new(vec![
        make_ingredient("Clay", 20.0, 1000.0),
        make_ingredient("Cobalt", 55.0, 100.0),
    ]);
    let items = vec![
        make_item("Cobalt", 10.0),
        make_item("Feldspar", 500.0),
        make_item("Clay", 250.0),
        make_item("Silica", 50.0),
    ];

    let reconciliation = reconcile(&index, &items);
    assert_eq!(
        reconciliation.matched.len() + reconciliation.unmatched.len(),
        items.len()
    );

    // Every input appears in exactly one side, order preserved within each
    let matched: Vec<&str> = reconciliation
        .matched
        .iter()
        .map(|m| m.item.ingredient_name.as_str())
        .collect();
    let unmatched: Vec<&str> = reconciliation
        .unmatched
        .iter()
        .map(|i| i.ingredient_name.as_str())
        .collect();
    assert_eq!(matched, vec!["Cobalt", "Clay"]);
    assert_eq!(unmatched, vec!["Feldspar", "Silica"]);
}

#[test]
fn test_subtotal_is_linear_in_quantity() {
    let index = CatalogIndex::new(vec![make_ingredient("Clay", 20.0, 1000.0)]);

    let single = vec![make_item("Clay", 250.0)];
    let double = vec![make_item("Clay", 500.0)];

    let one = ingredients_subtotal(&reconcile(&index, &single).matched);
    let two = ingredients_subtotal(&reconcile(&index, &double).matched);

    assert_float_absolute_eq!(two, 2.0 * one, 1e-9);
}

#[test]
fn test_empty_recipe_prices_to_zero() {
    let index = CatalogIndex::new(vec![make_ingredient("Clay", 20.0, 1000.0)]);
    let reconciliation = reconcile(&index, &[]);

    let breakdown = price_breakdown(&reconciliation.matched);
    assert_eq!(breakdown.ingredients_subtotal, 0.0);
    assert_eq!(breakdown.surcharge_amount, 0.0);
    assert_eq!(breakdown.tax_amount, 0.0);
    assert_eq!(breakdown.total, 0.0);
}

#[test]
fn test_recipe_add_then_reprice_replaces_line() {
    let index = CatalogIndex::new(vec![make_ingredient("Clay", 20.0, 1000.0)]);

    let mut recipe = Recipe::new();
    recipe.add(make_item("Clay", 250.0));
    recipe.add(make_item("Clay", 500.0));

    let reconciliation = reconcile(&index, recipe.items());
    assert_eq!(reconciliation.matched.len(), 1);

    let breakdown = price_breakdown(&reconciliation.matched);
    assert_float_absolute_eq!(breakdown.ingredients_subtotal, 10.0, 1e-9);
}

#[test]
fn test_unmatched_items_do_not_affect_price() {
    let index = CatalogIndex::new(vec![make_ingredient("Clay", 20.0, 1000.0)]);
    let with_stranger = vec![make_item("Clay", 250.0), make_item("Feldspar", 9999.0)];
    let without = vec![make_item("Clay", 250.0)];

    let priced_with = price_breakdown(&reconcile(&index, &with_stranger).matched);
    let priced_without = price_breakdown(&reconcile(&index, &without).matched);

    assert_float_absolute_eq!(priced_with.total, priced_without.total, 1e-9);
}
