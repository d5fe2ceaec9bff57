//! Database schema and row mapping

use rusqlite::Row;

use crate::models::Recipe;

/// Name of the single table
pub const RECIPES_TABLE: &str = "recipes";

/// Idempotent table creation
pub const CREATE_RECIPES_TABLE: &str = "CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    ingredients TEXT NOT NULL,
    instructions TEXT NOT NULL
)";

pub const INSERT_RECIPE: &str =
    "INSERT INTO recipes (title, ingredients, instructions) VALUES (?1, ?2, ?3)";

pub const SELECT_ALL_RECIPES: &str =
    "SELECT id, title, ingredients, instructions FROM recipes ORDER BY id";

pub const SELECT_RECIPE: &str =
    "SELECT id, title, ingredients, instructions FROM recipes WHERE id = ?1";

pub const UPDATE_RECIPE: &str =
    "UPDATE recipes SET title = ?1, ingredients = ?2, instructions = ?3 WHERE id = ?4";

pub const DELETE_RECIPE: &str = "DELETE FROM recipes WHERE id = ?1";

pub const COUNT_RECIPES: &str = "SELECT COUNT(*) FROM recipes";

/// Map a `SELECT id, title, ingredients, instructions` row to a recipe
pub fn recipe_from_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: row.get(0)?,
        title: row.get(1)?,
        ingredients: row.get(2)?,
        instructions: row.get(3)?,
    })
}
