//! Recipe Book - terminal recipe manager backed by SQLite
//!
//! This library provides the core functionality for the `recipes` binary: a
//! single-user store of recipes (title, ingredients, instructions) with a
//! menu-driven terminal UI and a scriptable command line.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and persisted settings
//! - `error`: Custom error types
//! - `logging`: File logging bootstrap
//! - `models`: The recipe entity, its id and the draft used for writes
//! - `storage`: SQLite persistence, one connection per operation
//! - `services`: Validation and lookups on top of storage
//! - `display`: Plain-text formatting for the command line
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//! - `tui`: The interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use recipe_book::config::{paths::RecipePaths, settings::Settings};
//! use recipe_book::storage::Storage;
//!
//! let paths = RecipePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::from_settings(&paths, &settings)?;
//! storage.initialize()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{RecipeError, RecipeResult};
