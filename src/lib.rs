pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod pricing;
pub mod source;

pub use error::{PricerError, Result};
pub use models::{Ingredient, Recipe, RecipeItem};
