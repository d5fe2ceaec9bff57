//! Terminal User Interface module
//!
//! A ratatui front end with three screens (Add Recipe, View Recipes,
//! Edit/Delete Recipe) selected from a sidebar menu.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
