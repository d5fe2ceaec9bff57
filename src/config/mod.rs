//! Configuration module for the recipe book
//!
//! This module provides configuration management including:
//! - Platform path resolution for config, data and logs
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RecipePaths;
pub use settings::Settings;
