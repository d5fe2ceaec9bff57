//! User settings for the recipe book
//!
//! Manages user preferences: database location, log verbosity and the delay
//! before the edit screen reloads after a change.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::RecipePaths;
use crate::error::RecipeError;

/// User settings for the recipe book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Database file name, relative to the data directory unless absolute
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Log level for the file logger (trace|debug|info|warn|error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Milliseconds to wait after an update or delete before reloading the screen
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_database_file() -> String {
    "recipes.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_refresh_delay_ms() -> u64 {
    1000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            database_file: default_database_file(),
            log_level: default_log_level(),
            refresh_delay_ms: default_refresh_delay_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &RecipePaths) -> Result<Self, RecipeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RecipeError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RecipeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RecipePaths) -> Result<(), RecipeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            RecipeError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| RecipeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the database file against the data directory
    pub fn database_path(&self, paths: &RecipePaths) -> PathBuf {
        let file = PathBuf::from(&self.database_file);
        if file.is_absolute() {
            file
        } else {
            paths.database_file(&self.database_file)
        }
    }

    /// The post-mutation refresh delay
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.database_file, "recipes.db");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.refresh_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RecipePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.refresh_delay_ms = 0;
        settings.log_level = "debug".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.refresh_delay_ms, 0);
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RecipePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"log_level":"warn"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.log_level, "warn");
        assert_eq!(loaded.database_file, "recipes.db");
        assert_eq!(loaded.refresh_delay_ms, 1000);
    }

    #[test]
    fn test_database_path_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RecipePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::default();
        assert_eq!(
            settings.database_path(&paths),
            temp_dir.path().join("data").join("recipes.db")
        );

        let absolute = temp_dir.path().join("elsewhere.db");
        let settings = Settings {
            database_file: absolute.to_string_lossy().into_owned(),
            ..Settings::default()
        };
        assert_eq!(settings.database_path(&paths), absolute);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RecipePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, RecipeError::Config(_)));
    }
}
