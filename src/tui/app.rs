//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the recipes loaded for the current screen, the two forms, selections and
//! the pending toasts and dialogs.

use std::collections::HashSet;
use std::time::Instant;

use log::{debug, error, info, warn};

use crate::config::settings::Settings;
use crate::error::RecipeError;
use crate::models::{Recipe, RecipeId};
use crate::services::RecipeService;
use crate::storage::Storage;

use super::views::recipe_form::{RecipeField, RecipeFormState};
use super::widgets::error_dialog::ErrorInfo;
use super::widgets::notification::{Notification, NotificationQueue};

/// Warning shown when a form is submitted with an empty field
pub const FILL_IN_ALL_FIELDS: &str = "Please fill in all fields.";

/// Info shown after an update or delete
pub const REFRESH_NOTICE: &str = "The page will refresh to show changes.";

/// Shown on the View screen when the store is empty
pub const NO_RECIPES: &str = "No recipes found. Add one from the 'Add Recipe' menu!";

/// Shown on the Edit/Delete screen when the store is empty
pub const NOTHING_TO_EDIT: &str = "No recipes to edit or delete.";

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    AddRecipe,
    ViewRecipes,
    EditRecipe,
}

impl ActiveView {
    /// Sidebar menu order
    pub const ALL: [ActiveView; 3] = [Self::AddRecipe, Self::ViewRecipes, Self::EditRecipe];

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddRecipe => "Add Recipe",
            Self::ViewRecipes => "View Recipes",
            Self::EditRecipe => "Edit/Delete Recipe",
        }
    }

    /// Position in the sidebar menu
    pub fn index(&self) -> usize {
        match self {
            Self::AddRecipe => 0,
            Self::ViewRecipes => 1,
            Self::EditRecipe => 2,
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keys go to the active form
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmDelete {
        id: RecipeId,
        title: String,
    },
    Error(ErrorInfo),
}

/// View screen state
#[derive(Debug, Default)]
pub struct BrowseState {
    pub selected_index: usize,
    pub expanded: HashSet<RecipeId>,
}

/// Edit/Delete screen state
#[derive(Debug, Default)]
pub struct EditState {
    pub selected_index: usize,
    pub form: RecipeFormState,
    /// Recipe whose values are currently in the form
    pub loaded_id: Option<RecipeId>,
}

/// Main application state
pub struct App<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,

    pub should_quit: bool,
    pub active_view: ActiveView,
    pub focused_panel: FocusedPanel,
    pub input_mode: InputMode,
    pub active_dialog: ActiveDialog,

    /// Highlighted sidebar entry
    pub sidebar_index: usize,

    /// Recipes as of the last reload
    pub recipes: Vec<Recipe>,

    pub add_form: RecipeFormState,
    pub browse: BrowseState,
    pub edit: EditState,

    pub notifications: NotificationQueue,

    /// When set, the screen reloads from storage once this instant passes
    pub pending_refresh: Option<Instant>,

    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            sidebar_index: 0,
            recipes: Vec::new(),
            add_form: RecipeFormState::new(),
            browse: BrowseState::default(),
            edit: EditState::default(),
            notifications: NotificationQueue::new(),
            pending_refresh: None,
            status_message: None,
        }
    }

    fn service(&self) -> RecipeService<'a> {
        RecipeService::new(self.storage)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Queue a toast
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Abandon the current interaction and show `err` in a dialog
    pub fn show_error(&mut self, err: &RecipeError) {
        if err.is_validation() || err.is_not_found() {
            warn!("event=tui_error view={:?} error=\"{}\"", self.active_view, err);
        } else {
            error!("event=tui_error view={:?} error=\"{}\"", self.active_view, err);
        }
        self.stop_editing();
        self.active_dialog = ActiveDialog::Error(ErrorInfo::from_error(err));
    }

    /// Reload recipes from storage and clamp selections to the new list
    pub fn reload(&mut self) {
        match self.service().list() {
            Ok(recipes) => {
                self.recipes = recipes;
                let last = self.recipes.len().saturating_sub(1);
                self.browse.selected_index = self.browse.selected_index.min(last);
                self.edit.selected_index = self.edit.selected_index.min(last);

                let live: HashSet<RecipeId> = self.recipes.iter().map(|r| r.id).collect();
                self.browse.expanded.retain(|id| live.contains(id));

                self.sync_edit_form(false);
                self.set_status(format!("{} recipe(s)", self.recipes.len()));
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Reload after a deferred refresh, discarding unsaved edit-form changes
    pub fn refresh(&mut self) {
        debug!("event=tui_refresh view={:?}", self.active_view);
        self.pending_refresh = None;
        self.reload();
        self.sync_edit_form(true);
    }

    /// Start the refresh countdown, or refresh now when the delay is zero
    pub fn schedule_refresh(&mut self) {
        let delay = self.settings.refresh_delay();
        if delay.is_zero() {
            self.refresh();
        } else {
            self.pending_refresh = Some(Instant::now() + delay);
        }
    }

    /// Whether the list on screen is stale and about to be reloaded
    ///
    /// Notifies the user when it is.
    fn refresh_pending(&mut self) -> bool {
        if self.pending_refresh.is_none() {
            return false;
        }
        self.notify(Notification::info(REFRESH_NOTICE));
        true
    }

    /// Periodic housekeeping: expire toasts, run a due refresh
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
        if let Some(deadline) = self.pending_refresh {
            if Instant::now() >= deadline {
                self.refresh();
            }
        }
    }

    /// Put the selected recipe's values into the edit form
    ///
    /// Without `force` the form is only replaced when the selection changed.
    fn sync_edit_form(&mut self, force: bool) {
        let selected = self.selected_edit_recipe().cloned();
        match selected {
            Some(recipe) if force || self.edit.loaded_id != Some(recipe.id) => {
                self.edit.form = RecipeFormState::from_recipe(&recipe);
                self.edit.loaded_id = Some(recipe.id);
                if self.input_mode == InputMode::Editing
                    && self.active_view == ActiveView::EditRecipe
                {
                    self.input_mode = InputMode::Normal;
                }
            }
            Some(_) => {}
            None => {
                self.edit.form = RecipeFormState::new();
                self.edit.loaded_id = None;
            }
        }
    }

    /// Recipe highlighted on the Edit/Delete screen
    pub fn selected_edit_recipe(&self) -> Option<&Recipe> {
        self.recipes.get(self.edit.selected_index)
    }

    /// Recipe highlighted on the View screen
    pub fn selected_browse_recipe(&self) -> Option<&Recipe> {
        self.recipes.get(self.browse.selected_index)
    }

    /// Switch to a different screen, reloading its data
    pub fn switch_view(&mut self, view: ActiveView) {
        self.stop_editing();
        self.active_view = view;
        self.sidebar_index = view.index();
        self.reload();
        if view == ActiveView::EditRecipe {
            self.sync_edit_form(true);
        }
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// The form on the active screen, if it has one
    pub fn active_form_mut(&mut self) -> Option<&mut RecipeFormState> {
        match self.active_view {
            ActiveView::AddRecipe => Some(&mut self.add_form),
            ActiveView::EditRecipe if self.edit.loaded_id.is_some() => Some(&mut self.edit.form),
            _ => None,
        }
    }

    /// Send keys to the active screen's form
    pub fn start_editing(&mut self) {
        let Some(form) = self.active_form_mut() else {
            return;
        };
        form.set_focus(RecipeField::Title);
        self.focused_panel = FocusedPanel::Main;
        self.input_mode = InputMode::Editing;
    }

    /// Leave the form, keeping its contents
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
        self.add_form.blur();
        self.edit.form.blur();
    }

    /// Move selection up in the focused panel
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                self.sidebar_index = self.sidebar_index.saturating_sub(1);
            }
            FocusedPanel::Main => match self.active_view {
                ActiveView::ViewRecipes => {
                    self.browse.selected_index = self.browse.selected_index.saturating_sub(1);
                }
                ActiveView::EditRecipe => {
                    self.edit.selected_index = self.edit.selected_index.saturating_sub(1);
                    self.sync_edit_form(false);
                }
                ActiveView::AddRecipe => {}
            },
        }
    }

    /// Move selection down in the focused panel
    pub fn move_down(&mut self) {
        let last = self.recipes.len().saturating_sub(1);
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                self.sidebar_index = (self.sidebar_index + 1).min(ActiveView::ALL.len() - 1);
            }
            FocusedPanel::Main => match self.active_view {
                ActiveView::ViewRecipes => {
                    self.browse.selected_index = (self.browse.selected_index + 1).min(last);
                }
                ActiveView::EditRecipe => {
                    self.edit.selected_index = (self.edit.selected_index + 1).min(last);
                    self.sync_edit_form(false);
                }
                ActiveView::AddRecipe => {}
            },
        }
    }

    /// Expand or collapse the highlighted recipe on the View screen
    pub fn toggle_expanded(&mut self) {
        if let Some(id) = self.selected_browse_recipe().map(|r| r.id) {
            if !self.browse.expanded.remove(&id) {
                self.browse.expanded.insert(id);
            }
        }
    }

    /// Submit the active screen's form
    pub fn submit(&mut self) {
        match self.active_view {
            ActiveView::AddRecipe => self.submit_add(),
            ActiveView::EditRecipe => self.submit_update(),
            ActiveView::ViewRecipes => {}
        }
    }

    /// Create a recipe from the Add form
    pub fn submit_add(&mut self) {
        let draft = self.add_form.draft();
        if draft.validate().is_err() {
            self.notify(Notification::warning(FILL_IN_ALL_FIELDS));
            return;
        }

        match self.service().add(draft) {
            Ok(recipe) => {
                info!("event=tui_add status=ok id={}", recipe.id);
                self.notify(Notification::success(format!(
                    "Recipe '{}' added successfully!",
                    recipe.title
                )));
                let editing = self.input_mode == InputMode::Editing;
                self.add_form = RecipeFormState::new();
                if editing {
                    self.add_form.set_focus(RecipeField::Title);
                }
                self.reload();
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Overwrite the selected recipe with the Edit form's values
    ///
    /// Drafts with an empty field are rejected, same as on add. Ignored while
    /// a refresh is pending, since the form may show a deleted record.
    pub fn submit_update(&mut self) {
        if self.refresh_pending() {
            return;
        }
        let Some(id) = self.edit.loaded_id else {
            return;
        };
        let draft = self.edit.form.draft();
        if draft.validate().is_err() {
            self.notify(Notification::warning(FILL_IN_ALL_FIELDS));
            return;
        }

        match self.service().update(id, &draft) {
            Ok(()) => {
                info!("event=tui_update status=ok id={}", id);
                self.notify(Notification::success(format!(
                    "Recipe '{}' updated successfully!",
                    draft.title
                )));
                self.notify(Notification::info(REFRESH_NOTICE));
                self.stop_editing();
                self.schedule_refresh();
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Ask for confirmation before deleting the selected recipe
    pub fn request_delete(&mut self) {
        if self.refresh_pending() {
            return;
        }
        let Some(recipe) = self.selected_edit_recipe() else {
            return;
        };
        let dialog = ActiveDialog::ConfirmDelete {
            id: recipe.id,
            title: recipe.title.clone(),
        };
        self.stop_editing();
        self.open_dialog(dialog);
    }

    /// Delete a recipe after the user confirmed
    pub fn confirm_delete(&mut self, id: RecipeId, title: &str) {
        self.close_dialog();
        match self.service().delete(id) {
            Ok(()) => {
                info!("event=tui_delete status=ok id={}", id);
                self.notify(Notification::warning(format!(
                    "Recipe '{}' has been deleted.",
                    title
                )));
                self.notify(Notification::info(REFRESH_NOTICE));
                self.schedule_refresh();
            }
            Err(e) => self.show_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeDraft;
    use std::time::Duration;
    use tempfile::TempDir;

    fn setup(refresh_delay_ms: u64) -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("recipes.db"));
        storage.initialize().unwrap();
        let settings = Settings {
            refresh_delay_ms,
            ..Settings::default()
        };
        (temp_dir, storage, settings)
    }

    fn fill(form: &mut RecipeFormState, title: &str, ingredients: &str, instructions: &str) {
        form.title.set_value(title);
        form.ingredients.set_value(ingredients);
        form.instructions.set_value(instructions);
    }

    fn messages(app: &App) -> Vec<String> {
        app.notifications
            .visible()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    #[test]
    fn test_submit_add_with_empty_field_warns_and_stores_nothing() {
        let (_dir, storage, settings) = setup(0);
        let mut app = App::new(&storage, &settings);
        fill(&mut app.add_form, "Pasta", "", "Boil");

        app.submit_add();

        assert_eq!(messages(&app), vec![FILL_IN_ALL_FIELDS.to_string()]);
        assert_eq!(storage.recipes.count().unwrap(), 0);
        assert_eq!(app.add_form.title.value(), "Pasta");
    }

    #[test]
    fn test_submit_add_creates_and_clears_form() {
        let (_dir, storage, settings) = setup(0);
        let mut app = App::new(&storage, &settings);
        fill(&mut app.add_form, "Pasta", "Pasta\nSalt", "Boil water; add pasta");

        app.submit_add();

        assert_eq!(
            messages(&app),
            vec!["Recipe 'Pasta' added successfully!".to_string()]
        );
        assert_eq!(app.recipes.len(), 1);
        assert_eq!(app.recipes[0].ingredients, "Pasta\nSalt");
        assert_eq!(app.add_form.title.value(), "");
    }

    #[test]
    fn test_switch_to_edit_prefills_first_recipe() {
        let (_dir, storage, settings) = setup(0);
        storage
            .recipes
            .create(&RecipeDraft::new("Soup", "Water", "Simmer"))
            .unwrap();
        let mut app = App::new(&storage, &settings);

        app.switch_view(ActiveView::EditRecipe);

        assert_eq!(app.edit.form.title.value(), "Soup");
        assert_eq!(app.edit.loaded_id, Some(app.recipes[0].id));
    }

    #[test]
    fn test_selection_change_reloads_form() {
        let (_dir, storage, settings) = setup(0);
        for title in ["Soup", "Soup"] {
            storage
                .recipes
                .create(&RecipeDraft::new(title, "Water", "Simmer"))
                .unwrap();
        }
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::EditRecipe);
        app.focused_panel = FocusedPanel::Main;

        app.move_down();

        // Same title, different record
        assert_eq!(app.edit.loaded_id, Some(app.recipes[1].id));
    }

    #[test]
    fn test_update_with_zero_delay_refreshes_immediately() {
        let (_dir, storage, settings) = setup(0);
        let id = storage
            .recipes
            .create(&RecipeDraft::new("Pasta", "Pasta\nSalt", "Boil water; add pasta"))
            .unwrap();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::EditRecipe);
        app.edit.form.title.set_value("Pasta Deluxe");

        app.submit_update();

        assert_eq!(
            messages(&app),
            vec![
                "Recipe 'Pasta Deluxe' updated successfully!".to_string(),
                REFRESH_NOTICE.to_string(),
            ]
        );
        assert!(app.pending_refresh.is_none());
        assert_eq!(app.recipes[0].title, "Pasta Deluxe");
        assert_eq!(storage.recipes.get(id).unwrap().unwrap().title, "Pasta Deluxe");
    }

    #[test]
    fn test_update_with_delay_waits_for_tick() {
        let (_dir, storage, settings) = setup(60_000);
        storage
            .recipes
            .create(&RecipeDraft::new("Pasta", "Pasta", "Boil"))
            .unwrap();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::EditRecipe);
        app.edit.form.title.set_value("Pasta Deluxe");

        app.submit_update();
        app.on_tick();

        // Stored, but the screen still shows the pre-update list
        assert!(app.pending_refresh.is_some());
        assert_eq!(app.recipes[0].title, "Pasta");

        app.pending_refresh = Some(Instant::now() - Duration::from_millis(1));
        app.on_tick();
        assert!(app.pending_refresh.is_none());
        assert_eq!(app.recipes[0].title, "Pasta Deluxe");
    }

    #[test]
    fn test_update_with_empty_field_is_rejected() {
        let (_dir, storage, settings) = setup(0);
        let id = storage
            .recipes
            .create(&RecipeDraft::new("Pasta", "Pasta", "Boil"))
            .unwrap();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::EditRecipe);
        app.edit.form.instructions.set_value("   ");

        app.submit_update();

        assert_eq!(messages(&app), vec![FILL_IN_ALL_FIELDS.to_string()]);
        assert_eq!(storage.recipes.get(id).unwrap().unwrap().instructions, "Boil");
    }

    #[test]
    fn test_delete_flow() {
        let (_dir, storage, settings) = setup(0);
        storage
            .recipes
            .create(&RecipeDraft::new("Pasta", "Pasta", "Boil"))
            .unwrap();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::EditRecipe);

        app.request_delete();
        let ActiveDialog::ConfirmDelete { id, title } = app.active_dialog.clone() else {
            panic!("expected confirm dialog");
        };
        assert_eq!(title, "Pasta");

        app.confirm_delete(id, &title);

        assert!(!app.has_dialog());
        assert!(app.recipes.is_empty());
        assert!(app.edit.loaded_id.is_none());
        assert_eq!(
            messages(&app),
            vec![
                "Recipe 'Pasta' has been deleted.".to_string(),
                REFRESH_NOTICE.to_string(),
            ]
        );
    }

    #[test]
    fn test_update_keeps_untouched_title_verbatim() {
        let (_dir, storage, settings) = setup(0);
        let id = storage
            .recipes
            .create(&RecipeDraft::new(" Pasta\nal forno ", "Pasta", "Bake"))
            .unwrap();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::EditRecipe);
        app.edit.form.instructions.set_value("Bake longer");

        app.submit_update();

        let stored = storage.recipes.get(id).unwrap().unwrap();
        assert_eq!(stored.title, " Pasta\nal forno ");
        assert_eq!(stored.instructions, "Bake longer");
    }

    #[test]
    fn test_mutations_wait_for_pending_refresh_after_delete() {
        let (_dir, storage, settings) = setup(60_000);
        storage
            .recipes
            .create(&RecipeDraft::new("Pasta", "Pasta", "Boil"))
            .unwrap();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::EditRecipe);
        let id = app.recipes[0].id;
        app.confirm_delete(id, "Pasta");
        assert!(app.pending_refresh.is_some());

        app.request_delete();
        assert!(!app.has_dialog());

        app.edit.form.title.set_value("Pasta Deluxe");
        app.submit_update();

        // Only the refresh notice is repeated; nothing claims success
        let shown = messages(&app);
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().all(|m| m == REFRESH_NOTICE));
        assert_eq!(storage.recipes.count().unwrap(), 0);
    }

    #[test]
    fn test_toggle_expanded() {
        let (_dir, storage, settings) = setup(0);
        let id = storage
            .recipes
            .create(&RecipeDraft::new("Pasta", "Pasta", "Boil"))
            .unwrap();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::ViewRecipes);

        app.toggle_expanded();
        assert!(app.browse.expanded.contains(&id));
        app.toggle_expanded();
        assert!(app.browse.expanded.is_empty());
    }

    #[test]
    fn test_storage_failure_opens_error_dialog() {
        let temp_dir = TempDir::new().unwrap();
        // No initialize(): the table is missing
        let storage = Storage::new(temp_dir.path().join("recipes.db"));
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.switch_view(ActiveView::ViewRecipes);

        match &app.active_dialog {
            ActiveDialog::Error(info) => assert_eq!(info.title, "Database Error"),
            other => panic!("expected error dialog, got {:?}", other),
        }
    }
}
