//! Custom error types for the recipe book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for recipe book operations
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// SQLite engine errors (I/O, corruption, lock contention)
    #[error("Database error: {0}")]
    Database(String),

    /// Validation errors for recipe input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl RecipeError {
    /// Create a "not found" error for recipes
    pub fn recipe_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Recipe",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for RecipeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RecipeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for RecipeError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for RecipeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<rusqlite::Error> for RecipeError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Result type alias for recipe book operations
pub type RecipeResult<T> = Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecipeError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = RecipeError::recipe_not_found("#42");
        assert_eq!(err.to_string(), "Recipe not found: #42");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let recipe_err: RecipeError = io_err.into();
        assert!(matches!(recipe_err, RecipeError::Io(_)));
    }

    #[test]
    fn test_from_serde_errors() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(RecipeError::from(json_err), RecipeError::Json(_)));

        let yaml_err = serde_yaml::from_str::<u32>("[1, 2").unwrap_err();
        assert!(matches!(RecipeError::from(yaml_err), RecipeError::Yaml(_)));
    }

    #[test]
    fn test_from_sqlite_error() {
        let sqlite_err = rusqlite::Error::QueryReturnedNoRows;
        let recipe_err: RecipeError = sqlite_err.into();
        assert!(matches!(recipe_err, RecipeError::Database(_)));
    }
}
