//! Recipe repository for SQLite storage
//!
//! Each method opens a connection, runs exactly one statement and closes the
//! connection again. Update and delete of an unknown id are silent no-ops.

use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::{params, OptionalExtension};

use crate::error::{RecipeError, RecipeResult};
use crate::models::{Recipe, RecipeDraft, RecipeId};

use super::connection::with_connection;
use super::schema;

/// Repository for recipe persistence
#[derive(Debug, Clone)]
pub struct RecipeRepository {
    db_path: PathBuf,
}

impl RecipeRepository {
    /// Create a repository for the database file at `db_path`
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Ensure the recipes table exists
    ///
    /// Safe to call on every start; creates the parent directory if needed.
    pub fn initialize(&self) -> RecipeResult<()> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RecipeError::Io(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        with_connection(&self.db_path, "initialize", |conn| {
            conn.execute(schema::CREATE_RECIPES_TABLE, [])
        })?;

        info!(
            "event=schema_init status=ok table={} path={}",
            schema::RECIPES_TABLE,
            self.db_path.display()
        );
        Ok(())
    }

    /// Insert a new recipe and return its store-assigned id
    ///
    /// Field validation is the caller's responsibility.
    pub fn create(&self, draft: &RecipeDraft) -> RecipeResult<RecipeId> {
        let id = with_connection(&self.db_path, "create", |conn| {
            conn.execute(
                schema::INSERT_RECIPE,
                params![draft.title, draft.ingredients, draft.instructions],
            )?;
            Ok(RecipeId::from_raw(conn.last_insert_rowid()))
        })?;

        info!("event=recipe_create status=ok id={}", id);
        Ok(id)
    }

    /// Every stored recipe, in insertion order
    pub fn list_all(&self) -> RecipeResult<Vec<Recipe>> {
        with_connection(&self.db_path, "list_all", |conn| {
            let mut stmt = conn.prepare(schema::SELECT_ALL_RECIPES)?;
            let rows = stmt.query_map([], schema::recipe_from_row)?;
            rows.collect()
        })
    }

    /// A single recipe by id
    pub fn get(&self, id: RecipeId) -> RecipeResult<Option<Recipe>> {
        with_connection(&self.db_path, "get", |conn| {
            conn.query_row(schema::SELECT_RECIPE, params![id], schema::recipe_from_row)
                .optional()
        })
    }

    /// Overwrite all three fields of the recipe with `id`
    pub fn update(&self, id: RecipeId, draft: &RecipeDraft) -> RecipeResult<()> {
        let changed = with_connection(&self.db_path, "update", |conn| {
            conn.execute(
                schema::UPDATE_RECIPE,
                params![draft.title, draft.ingredients, draft.instructions, id],
            )
        })?;

        if changed == 0 {
            debug!("event=recipe_update status=noop id={}", id);
        } else {
            info!("event=recipe_update status=ok id={}", id);
        }
        Ok(())
    }

    /// Remove the recipe with `id`
    pub fn delete(&self, id: RecipeId) -> RecipeResult<()> {
        let changed = with_connection(&self.db_path, "delete", |conn| {
            conn.execute(schema::DELETE_RECIPE, params![id])
        })?;

        if changed == 0 {
            debug!("event=recipe_delete status=noop id={}", id);
        } else {
            info!("event=recipe_delete status=ok id={}", id);
        }
        Ok(())
    }

    /// Number of stored recipes
    pub fn count(&self) -> RecipeResult<usize> {
        let count: i64 = with_connection(&self.db_path, "count", |conn| {
            conn.query_row(schema::COUNT_RECIPES, [], |row| row.get(0))
        })?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
