//! Service layer for the recipe book
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and identifier resolution.

pub mod recipe;

pub use recipe::RecipeService;
