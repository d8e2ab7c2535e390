use clap::{Parser, Subcommand};

/// RecipePricer — price ad-hoc recipes against a studio ingredient catalog.
#[derive(Parser, Debug)]
#[command(name = "recipe_pricer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog CSV export.
    #[arg(short, long, default_value = "prices.csv")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a recipe and price it against the catalog.
    Price {
        /// Price a recipe from a JSON file instead of interactively.
        #[arg(long)]
        recipe: Option<String>,
    },

    /// Fetch, normalize, and print the effective catalog.
    Catalog {
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Price { recipe: None }
    }
}
