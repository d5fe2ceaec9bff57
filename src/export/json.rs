//! JSON Export functionality
//!
//! Exports every recipe to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::RecipeResult;
use crate::models::Recipe;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All recipes, in insertion order
    pub recipes: Vec<Recipe>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of recipes
    pub recipe_count: usize,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> RecipeResult<Self> {
        let recipes = storage.recipes.list_all()?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                recipe_count: recipes.len(),
            },
            recipes,
        })
    }
}

/// Export the full database to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> RecipeResult<()> {
    let export = FullExport::from_storage(storage)?;

    let written = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };
    written?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeDraft;
    use tempfile::TempDir;

    #[test]
    fn test_json_export_contains_all_recipes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("recipes.db"));
        storage.initialize().unwrap();
        storage
            .recipes
            .create(&RecipeDraft::new("Pasta", "Pasta\nSalt", "Boil"))
            .unwrap();
        storage
            .recipes
            .create(&RecipeDraft::new("Soup", "Water", "Heat"))
            .unwrap();

        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.metadata.recipe_count, 2);
        assert_eq!(parsed.recipes[0].ingredients, "Pasta\nSalt");
        assert_eq!(parsed.recipes[1].title, "Soup");
    }
}
