//! CSV Export functionality
//!
//! One row per recipe. Multi-line ingredients and instructions stay intact
//! inside quoted fields.

use std::io::Write;

use crate::error::RecipeResult;
use crate::storage::Storage;

/// Column headers for recipe CSV exports
pub const CSV_HEADER: [&str; 4] = ["ID", "Title", "Ingredients", "Instructions"];

/// Export all recipes to CSV
pub fn export_recipes_csv<W: Write>(storage: &Storage, writer: W) -> RecipeResult<usize> {
    let recipes = storage.recipes.list_all()?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for recipe in &recipes {
        csv_writer.write_record([
            recipe.id.as_raw().to_string().as_str(),
            recipe.title.as_str(),
            recipe.ingredients.as_str(),
            recipe.instructions.as_str(),
        ])?;
    }
    csv_writer.flush()?;

    Ok(recipes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeDraft;
    use tempfile::TempDir;

    #[test]
    fn test_csv_export_quotes_multiline_fields() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("recipes.db"));
        storage.initialize().unwrap();
        storage
            .recipes
            .create(&RecipeDraft::new("Pasta, fresh", "Flour\nEggs", "Knead"))
            .unwrap();

        let mut buffer = Vec::new();
        let count = export_recipes_csv(&storage, &mut buffer).unwrap();
        assert_eq!(count, 1);

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "Pasta, fresh");
        assert_eq!(&rows[0][2], "Flour\nEggs");
    }
}
