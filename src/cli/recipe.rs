//! Recipe CLI commands
//!
//! Implements the scriptable counterparts of the Add, View and Edit/Delete
//! screens.

use clap::Subcommand;

use crate::display::recipe::{format_recipe_details, format_recipe_list};
use crate::error::{RecipeError, RecipeResult};
use crate::models::RecipeDraft;
use crate::services::RecipeService;
use crate::storage::Storage;

/// Recipe subcommands
#[derive(Subcommand, Debug)]
pub enum RecipeCommands {
    /// Add a new recipe
    Add {
        /// Recipe title
        title: String,
        /// Ingredient (repeat for each line)
        #[arg(short = 'i', long = "ingredient", required = true)]
        ingredients: Vec<String>,
        /// Preparation instructions
        #[arg(short = 's', long)]
        instructions: String,
    },

    /// List all recipes
    #[command(alias = "ls")]
    List,

    /// Show a recipe in full
    Show {
        /// Recipe title or ID
        recipe: String,
    },

    /// Edit a recipe (fields not given keep their current value)
    Edit {
        /// Recipe title or ID
        recipe: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// Replacement ingredient list (repeat for each line)
        #[arg(short = 'i', long = "ingredient")]
        ingredients: Vec<String>,
        /// New instructions
        #[arg(short = 's', long)]
        instructions: Option<String>,
    },

    /// Delete a recipe
    #[command(alias = "rm")]
    Delete {
        /// Recipe title or ID
        recipe: String,
    },
}

/// Handle a recipe command
pub fn handle_recipe_command(storage: &Storage, cmd: RecipeCommands) -> RecipeResult<()> {
    let service = RecipeService::new(storage);

    match cmd {
        RecipeCommands::Add {
            title,
            ingredients,
            instructions,
        } => {
            let draft = RecipeDraft::new(title, ingredients.join("\n"), instructions);
            let recipe = service.add(draft)?;
            println!("Recipe '{}' added successfully! ({})", recipe.title, recipe.id);
        }

        RecipeCommands::List => {
            let recipes = service.list()?;
            print!("{}", format_recipe_list(&recipes));
        }

        RecipeCommands::Show { recipe } => {
            let recipe = service.require(&recipe)?;
            print!("{}", format_recipe_details(&recipe));
        }

        RecipeCommands::Edit {
            recipe,
            title,
            ingredients,
            instructions,
        } => {
            if title.is_none() && ingredients.is_empty() && instructions.is_none() {
                return Err(RecipeError::Validation(
                    "Nothing to change; pass --title, --ingredient or --instructions".into(),
                ));
            }

            let current = service.require(&recipe)?;
            let mut draft = current.to_draft();
            if let Some(title) = title {
                draft.title = title;
            }
            if !ingredients.is_empty() {
                draft.ingredients = ingredients.join("\n");
            }
            if let Some(instructions) = instructions {
                draft.instructions = instructions;
            }

            service.update(current.id, &draft)?;
            println!("Recipe '{}' updated successfully!", draft.title);
        }

        RecipeCommands::Delete { recipe } => {
            let recipe = service.require(&recipe)?;
            service.delete(recipe.id)?;
            println!("Recipe '{}' has been deleted.", recipe.title);
        }
    }

    Ok(())
}
