use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PricerError, Result};
use crate::models::{Ingredient, RecipeItem};

/// What the user wants to do next with the recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeAction {
    Add,
    Remove,
    Done,
}

/// Prompt for the next recipe action.
pub fn prompt_action(can_remove: bool) -> Result<RecipeAction> {
    let mut options = vec!["Add ingredient"];
    if can_remove {
        options.push("Remove item");
    }
    options.push("Done");

    let selection = Select::new()
        .with_prompt("Recipe")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match options[selection] {
        "Add ingredient" => RecipeAction::Add,
        "Remove item" => RecipeAction::Remove,
        _ => RecipeAction::Done,
    })
}

/// Prompt for an ingredient from the selectable catalog entries, with fuzzy
/// narrowing.
///
/// The fuzzy scores only reorder and filter the candidate list; the user
/// always confirms a concrete catalog entry, so the returned name is exact.
/// Returns `None` if the user cancels with an empty input.
pub fn prompt_ingredient(selectable: &[&Ingredient]) -> Result<Option<String>> {
    if selectable.is_empty() {
        return Err(PricerError::NoSelectableIngredients);
    }

    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient (or press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Exact match first (case-insensitive)
        let exact_match = selectable
            .iter()
            .find(|i| i.name.to_lowercase() == input.to_lowercase());

        if let Some(ingredient) = exact_match {
            return Ok(Some(ingredient.name.clone()));
        }

        // Fuzzy matching
        let mut candidates: Vec<(&Ingredient, f64)> = selectable
            .iter()
            .map(|i| (*i, jaro_winkler(&i.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching ingredient found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let ingredient = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", ingredient.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(ingredient.name.clone()));
            }
            continue;
        }

        // Multiple matches - let user select
        let options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(i, _)| i.name.clone())
            .collect();

        let mut selection_options = options.clone();
        selection_options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(Some(options[selection].clone()));
        }
    }
}

/// Prompt for a quantity, re-asking until it is a number greater than 0.
pub fn prompt_quantity() -> Result<f64> {
    loop {
        let input: String = Input::new().with_prompt("Quantity").interact_text()?;

        match input.trim().parse::<f64>() {
            Ok(quantity) if quantity > 0.0 => return Ok(quantity),
            _ => println!("Quantity must be a number greater than 0"),
        }
    }
}

/// Prompt for which recipe item to remove. Returns `None` on cancel.
pub fn prompt_removal(items: &[RecipeItem]) -> Result<Option<String>> {
    let mut options: Vec<String> = items.iter().map(|i| i.ingredient_name.clone()).collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Remove which item?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < items.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}
