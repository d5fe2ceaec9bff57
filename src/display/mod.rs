//! Display formatting for terminal output
//!
//! Provides utilities for formatting recipes for the command line.

pub mod recipe;

pub use recipe::{format_recipe_details, format_recipe_list, truncate};
