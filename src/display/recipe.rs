//! Recipe display formatting
//!
//! Formats recipes for terminal output in table and detail views.

use crate::models::Recipe;

/// Maximum title width in the list table
const MAX_TITLE_WIDTH: usize = 40;

/// Format a list of recipes as a table
pub fn format_recipe_list(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes found.\n\nRun 'recipes add' to create one.".to_string();
    }

    let id_width = recipes
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let title_width = recipes
        .iter()
        .map(|r| r.title.chars().count().min(MAX_TITLE_WIDTH))
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<title_width$}  {:>11}\n",
        "ID",
        "Title",
        "Ingredients",
        id_width = id_width,
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<title_width$}  {:->11}\n",
        "",
        "",
        "",
        id_width = id_width,
        title_width = title_width,
    ));

    for recipe in recipes {
        output.push_str(&format!(
            "{:<id_width$}  {:<title_width$}  {:>11}\n",
            recipe.id.to_string(),
            truncate(&recipe.title, MAX_TITLE_WIDTH),
            recipe.ingredient_lines().len(),
            id_width = id_width,
            title_width = title_width,
        ));
    }

    output.push_str(&format!("\n{} recipe(s)\n", recipes.len()));
    output
}

/// Format a single recipe with all of its text
pub fn format_recipe_details(recipe: &Recipe) -> String {
    let mut output = String::new();

    let heading = format!("{} {}", recipe.id, recipe.title);
    output.push_str(&format!("{}\n", heading));
    output.push_str(&format!("{}\n\n", "=".repeat(heading.chars().count())));

    output.push_str("Ingredients:\n");
    for line in recipe.ingredient_lines() {
        output.push_str(&format!("  - {}\n", line));
    }

    output.push_str("\nInstructions:\n");
    for line in recipe.instructions.lines() {
        output.push_str(&format!("  {}\n", line));
    }

    output
}

/// Truncate to `max_len` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
