//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod recipe;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use recipe::{handle_recipe_command, RecipeCommands};
