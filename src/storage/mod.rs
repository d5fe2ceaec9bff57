//! Storage layer for the recipe book
//!
//! A single SQLite file holds one `recipes` table. Connections are opened
//! per operation; nothing here holds a connection between calls.

pub mod connection;
pub mod recipes;
pub mod schema;

pub use recipes::RecipeRepository;

use std::path::{Path, PathBuf};

use crate::config::paths::RecipePaths;
use crate::config::settings::Settings;
use crate::error::RecipeError;

/// Main storage coordinator that provides access to the repositories
#[derive(Debug, Clone)]
pub struct Storage {
    pub recipes: RecipeRepository,
}

impl Storage {
    /// Create storage over an explicit database file
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            recipes: RecipeRepository::new(db_path),
        }
    }

    /// Create storage at the location configured in `settings`
    pub fn from_settings(paths: &RecipePaths, settings: &Settings) -> Result<Self, RecipeError> {
        paths.ensure_directories()?;
        Ok(Self::new(settings.database_path(paths)))
    }

    /// Create the schema if it is missing
    pub fn initialize(&self) -> Result<(), RecipeError> {
        self.recipes.initialize()
    }

    /// Path of the database file
    pub fn database_path(&self) -> &Path {
        self.recipes.path()
    }
}
