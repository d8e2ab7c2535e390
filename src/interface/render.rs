use crate::models::Ingredient;
use crate::pricing::{
    line_price, PricedBreakdown, Reconciliation, SALES_TAX_RATE, STUDIO_SURCHARGE_RATE,
};

/// Display the priced line items, the breakdown summary, and any unmatched
/// recipe items.
pub fn display_breakdown(reconciliation: &Reconciliation, breakdown: &PricedBreakdown) {
    if reconciliation.matched.is_empty() && reconciliation.unmatched.is_empty() {
        println!();
        println!("Recipe is empty.");
        println!();
        return;
    }

    println!();
    println!("=== Recipe ===");
    println!();

    // Find max name length for alignment
    let max_name_len = reconciliation
        .matched
        .iter()
        .map(|m| m.ingredient.name.len())
        .max()
        .unwrap_or(10);

    for matched in &reconciliation.matched {
        println!(
            "  {:<width$} {:>10.2} {:>10}",
            matched.ingredient.name,
            matched.item.quantity,
            format!("${:.2}", line_price(matched)),
            width = max_name_len
        );
    }

    println!();
    println!("--- Breakdown ---");
    println!("Ingredients subtotal: ${:.2}", breakdown.ingredients_subtotal);
    println!(
        "Studio surcharge ({:.0}%): ${:.2}",
        STUDIO_SURCHARGE_RATE * 100.0,
        breakdown.surcharge_amount
    );
    println!(
        "Sales tax ({:.0}%): ${:.2}",
        SALES_TAX_RATE * 100.0,
        breakdown.tax_amount
    );
    println!("Total price: ${:.2}", breakdown.total);
    println!();

    for item in &reconciliation.unmatched {
        println!(
            "Could not find ingredient '{}'. Remove it or fix the catalog.",
            item.ingredient_name
        );
    }
    if !reconciliation.unmatched.is_empty() {
        println!();
    }
}

/// Display the effective catalog as a table.
pub fn display_catalog(catalog: &[Ingredient]) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    println!();
    println!("=== Catalog ({} ingredients) ===", catalog.len());
    println!();

    let max_name_len = catalog.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for ingredient in catalog {
        let availability = if ingredient.available { "" } else { "  (unavailable)" };
        println!(
            "  {:<width$} {:>10.2} / pack of {:<8} {}",
            ingredient.name,
            ingredient.pack_price,
            format!("{}", ingredient.pack_quantity),
            availability,
            width = max_name_len
        );
    }

    println!();
}
