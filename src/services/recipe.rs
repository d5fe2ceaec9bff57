//! Recipe service
//!
//! Business rules on top of the recipe repository: drafts must have every
//! field filled in before they reach storage, and lookups by user-typed
//! identifiers resolve titles before ids.

use log::warn;

use crate::error::{RecipeError, RecipeResult};
use crate::models::{Recipe, RecipeDraft, RecipeId};
use crate::storage::Storage;

/// Service for recipe management
pub struct RecipeService<'a> {
    storage: &'a Storage,
}

impl<'a> RecipeService<'a> {
    /// Create a new recipe service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a new recipe
    pub fn add(&self, draft: RecipeDraft) -> RecipeResult<Recipe> {
        Self::check(&draft)?;
        let id = self.storage.recipes.create(&draft)?;
        Ok(draft.into_recipe(id))
    }

    /// All recipes in insertion order
    pub fn list(&self) -> RecipeResult<Vec<Recipe>> {
        self.storage.recipes.list_all()
    }

    /// Get a recipe by id
    pub fn get(&self, id: RecipeId) -> RecipeResult<Option<Recipe>> {
        self.storage.recipes.get(id)
    }

    /// Find a recipe by title or id
    ///
    /// The first recipe whose title matches exactly wins; otherwise the
    /// identifier is parsed as an id (`12` or `#12`).
    pub fn find(&self, identifier: &str) -> RecipeResult<Option<Recipe>> {
        let recipes = self.storage.recipes.list_all()?;
        if let Some(recipe) = first_with_title(&recipes, identifier) {
            return Ok(Some(recipe.clone()));
        }

        if let Ok(id) = identifier.parse::<RecipeId>() {
            return Ok(recipes.into_iter().find(|r| r.id == id));
        }

        Ok(None)
    }

    /// Find a recipe by title or id, failing if there is none
    pub fn require(&self, identifier: &str) -> RecipeResult<Recipe> {
        self.find(identifier)?
            .ok_or_else(|| RecipeError::recipe_not_found(identifier))
    }

    /// Validate and overwrite the recipe with `id`
    ///
    /// An unknown id is not an error.
    pub fn update(&self, id: RecipeId, draft: &RecipeDraft) -> RecipeResult<()> {
        Self::check(draft)?;
        self.storage.recipes.update(id, draft)
    }

    /// Delete the recipe with `id`; an unknown id is not an error
    pub fn delete(&self, id: RecipeId) -> RecipeResult<()> {
        self.storage.recipes.delete(id)
    }

    /// Number of stored recipes
    pub fn count(&self) -> RecipeResult<usize> {
        self.storage.recipes.count()
    }

    fn check(draft: &RecipeDraft) -> RecipeResult<()> {
        draft.validate().map_err(|e| {
            warn!("event=recipe_validate status=rejected reason=\"{}\"", e);
            RecipeError::Validation(e.to_string())
        })
    }
}

/// The first recipe whose title equals `title`
pub fn first_with_title<'r>(recipes: &'r [Recipe], title: &str) -> Option<&'r Recipe> {
    recipes.iter().find(|r| r.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("recipes.db"));
        storage.initialize().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_recipe() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecipeService::new(&storage);

        let recipe = service
            .add(RecipeDraft::new("Pasta", "Pasta\nSalt", "Boil water; add pasta"))
            .unwrap();

        assert_eq!(recipe.title, "Pasta");
        assert_eq!(service.get(recipe.id).unwrap(), Some(recipe));
    }

    #[test]
    fn test_add_rejects_empty_fields_without_storing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecipeService::new(&storage);

        let err = service
            .add(RecipeDraft::new("Pasta", "", "Boil"))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_update_rejects_empty_title() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecipeService::new(&storage);
        let recipe = service.add(RecipeDraft::new("Soup", "Water", "Heat")).unwrap();

        let err = service
            .update(recipe.id, &RecipeDraft::new("", "Water", "Heat"))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.get(recipe.id).unwrap().unwrap().title, "Soup");
    }

    #[test]
    fn test_update_and_delete_unknown_ids_are_silent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecipeService::new(&storage);
        service.add(RecipeDraft::new("Soup", "Water", "Heat")).unwrap();

        let missing = RecipeId::from_raw(77);
        service
            .update(missing, &RecipeDraft::new("Stew", "Beef", "Simmer"))
            .unwrap();
        service.delete(missing).unwrap();

        let recipes = service.list().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Soup");
    }

    #[test]
    fn test_find_prefers_title_then_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecipeService::new(&storage);
        let first = service.add(RecipeDraft::new("Toast", "Bread", "Toast")).unwrap();
        let _second = service.add(RecipeDraft::new("Toast", "Rye", "Toast")).unwrap();

        let found = service.find("Toast").unwrap().unwrap();
        assert_eq!(found.id, first.id);

        let by_id = service.find(&format!("#{}", first.id.as_raw())).unwrap();
        assert_eq!(by_id.map(|r| r.id), Some(first.id));

        assert!(service.find("Pancakes").unwrap().is_none());
        assert!(service.require("Pancakes").unwrap_err().is_not_found());
    }
}
