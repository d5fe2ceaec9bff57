//! Recipe model
//!
//! A recipe is a title, a free-form ingredients text (one item per line by
//! convention) and free-form instructions. The store assigns the id.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecipeId;

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier
    pub id: RecipeId,

    /// Recipe title
    pub title: String,

    /// Ingredients, one per line
    pub ingredients: String,

    /// Preparation instructions
    pub instructions: String,
}

impl Recipe {
    /// Non-blank ingredient lines, trimmed
    pub fn ingredient_lines(&self) -> Vec<&str> {
        self.ingredients
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// The editable fields of this recipe
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// The three user-supplied fields, used as input for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeDraft {
    /// Create a new draft
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
        }
    }

    /// Check that every field is filled in
    ///
    /// Whitespace-only text counts as empty. The first empty field is reported.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        if self.title.trim().is_empty() {
            return Err(RecipeValidationError::EmptyTitle);
        }
        if self.ingredients.trim().is_empty() {
            return Err(RecipeValidationError::EmptyIngredients);
        }
        if self.instructions.trim().is_empty() {
            return Err(RecipeValidationError::EmptyInstructions);
        }
        Ok(())
    }

    /// Attach a store-assigned id
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}

/// Validation errors for recipe drafts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeValidationError {
    EmptyTitle,
    EmptyIngredients,
    EmptyInstructions,
}

impl fmt::Display for RecipeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Recipe title cannot be empty"),
            Self::EmptyIngredients => write!(f, "Ingredients cannot be empty"),
            Self::EmptyInstructions => write!(f, "Instructions cannot be empty"),
        }
    }
}

impl std::error::Error for RecipeValidationError {}
