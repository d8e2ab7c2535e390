use clap::Parser;
use std::fs;

use recipe_pricer_rs::catalog::{fetch_catalog, CatalogIndex};
use recipe_pricer_rs::cli::{Cli, Command};
use recipe_pricer_rs::error::{PricerError, Result};
use recipe_pricer_rs::interface::{
    display_breakdown, display_catalog, prompt_action, prompt_ingredient, prompt_quantity,
    prompt_removal, RecipeAction,
};
use recipe_pricer_rs::models::{Ingredient, Recipe, RecipeItem};
use recipe_pricer_rs::pricing::{price_breakdown, reconcile};
use recipe_pricer_rs::source::{CsvSource, SheetRange};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Price { recipe } => cmd_price(&cli.file, recipe.as_deref()),
        Command::Catalog { json } => cmd_catalog(&cli.file, json),
    }
}

/// Fetch and normalize the effective catalog from the CSV export.
fn load_catalog(file_path: &str) -> Result<Vec<Ingredient>> {
    let source = CsvSource::new(file_path);
    let range = SheetRange::default();
    fetch_catalog(&source, &range)
}

/// Build a recipe interactively (or load one from a file) and price it.
fn cmd_price(file_path: &str, recipe_file: Option<&str>) -> Result<()> {
    let catalog = load_catalog(file_path)?;
    println!("Loaded {} priced ingredients", catalog.len());

    let index = CatalogIndex::new(catalog);

    if let Some(path) = recipe_file {
        return price_recipe_file(&index, path);
    }

    let selectable = index.selectable();
    if selectable.is_empty() {
        return Err(PricerError::NoSelectableIngredients);
    }

    let mut recipe = Recipe::new();

    loop {
        // One consistent (catalog, recipe) snapshot per pass: reconcile,
        // price, render, then apply the next mutation.
        let reconciliation = reconcile(&index, recipe.items());
        let breakdown = price_breakdown(&reconciliation.matched);
        display_breakdown(&reconciliation, &breakdown);

        match prompt_action(!recipe.is_empty())? {
            RecipeAction::Add => {
                let Some(name) = prompt_ingredient(&selectable)? else {
                    continue;
                };
                let quantity = prompt_quantity()?;
                recipe.add(RecipeItem {
                    ingredient_name: name,
                    quantity,
                });
            }
            RecipeAction::Remove => {
                if let Some(name) = prompt_removal(recipe.items())? {
                    recipe.remove(&name);
                }
            }
            RecipeAction::Done => break,
        }
    }

    Ok(())
}

/// Price a RecipeItem list from a JSON file in one pass.
fn price_recipe_file(index: &CatalogIndex, path: &str) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let items: Vec<RecipeItem> = serde_json::from_str(&content)?;

    if let Some(bad) = items.iter().find(|i| !(i.quantity > 0.0)) {
        return Err(PricerError::InvalidInput(format!(
            "quantity for '{}' must be a number greater than 0",
            bad.ingredient_name
        )));
    }

    let recipe: Recipe = items.into_iter().collect();
    let reconciliation = reconcile(index, recipe.items());
    let breakdown = price_breakdown(&reconciliation.matched);
    display_breakdown(&reconciliation, &breakdown);

    Ok(())
}

/// Print the effective catalog, as a table or as JSON.
fn cmd_catalog(file_path: &str, json: bool) -> Result<()> {
    let catalog = load_catalog(file_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        display_catalog(&catalog);
    }

    Ok(())
}
