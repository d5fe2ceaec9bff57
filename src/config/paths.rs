//! Path management for the recipe book
//!
//! ## Path Resolution Order
//!
//! 1. `RECIPE_BOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `recipe-book`
//!    (`$XDG_CONFIG_HOME/recipe-book`, `~/Library/Application Support/recipe-book`,
//!    `%APPDATA%\recipe-book`)

use std::path::{Path, PathBuf};

use crate::error::RecipeError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "RECIPE_BOOK_DATA_DIR";

/// Directory name under the platform config directory
const APP_DIR_NAME: &str = "recipe-book";

/// Manages all paths used by the recipe book
#[derive(Debug, Clone)]
pub struct RecipePaths {
    /// Base directory for all recipe book files
    base_dir: PathBuf,
}

impl RecipePaths {
    /// Create a new RecipePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, RecipeError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create RecipePaths rooted at `base_dir`
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the log directory (`<base>/logs/`)
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path of a database file inside the data directory
    pub fn database_file(&self, file_name: &str) -> PathBuf {
        self.data_dir().join(file_name)
    }

    /// Ensure the base, data and log directories exist
    pub fn ensure_directories(&self) -> Result<(), RecipeError> {
        for dir in [self.base_dir.clone(), self.data_dir(), self.log_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                RecipeError::Io(format!(
                    "Failed to create directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Check if the recipe book has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, RecipeError> {
    let dirs = directories::BaseDirs::new()
        .ok_or_else(|| RecipeError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RecipePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.log_dir(), temp_dir.path().join("logs"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = RecipePaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RecipePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.log_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RecipePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.database_file("recipes.db"),
            temp_dir.path().join("data").join("recipes.db")
        );
    }
}
