//! Core data models for the recipe book

pub mod ids;
pub mod recipe;

pub use ids::RecipeId;
pub use recipe::{Recipe, RecipeDraft, RecipeValidationError};
