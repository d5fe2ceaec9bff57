//! TUI Views module
//!
//! The three recipe screens, the shared form, the sidebar and the status bar.

pub mod add_recipe;
pub mod edit_recipe;
pub mod recipe_form;
pub mod sidebar;
pub mod status_bar;
pub mod view_recipes;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel};
use super::dialogs;
use super::layout::{AppLayout, MainPanelLayout};
use super::widgets::{error_dialog_area, toast_area, ErrorDialog, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    let main = MainPanelLayout::new(layout.main);
    render_heading(frame, app, main.header);
    match app.active_view {
        ActiveView::AddRecipe => add_recipe::render(frame, app, main.content),
        ActiveView::ViewRecipes => view_recipes::render(frame, app, main.content),
        ActiveView::EditRecipe => edit_recipe::render(frame, app, main.content),
    }

    status_bar::render(frame, app, layout.status_bar);

    for (slot, notification) in app.notifications.visible().iter().enumerate() {
        if let Some(area) = toast_area(layout.main, slot) {
            frame.render_widget(NotificationWidget::new(notification), area);
        }
    }

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmDelete { title, .. } => {
            dialogs::confirm::render(frame, &format!("Delete recipe '{}'?", title));
        }
        ActiveDialog::Error(info) => {
            let area = error_dialog_area(frame.area());
            frame.render_widget(ErrorDialog::new(info), area);
        }
        ActiveDialog::None => {}
    }
}

fn render_heading(frame: &mut Frame, app: &App, area: Rect) {
    let heading = match app.active_view {
        ActiveView::AddRecipe => "Add a New Recipe",
        ActiveView::ViewRecipes => "All Recipes",
        ActiveView::EditRecipe => "Edit or Delete a Recipe",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Paragraph::new(heading)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    frame.render_widget(title, area);
}

/// Bordered block for the main panel, highlighted when it has focus
pub(crate) fn panel_block(app: &App, title: impl Into<String>) -> Block<'static> {
    let border_color = if app.focused_panel == FocusedPanel::Main {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    Block::default()
        .title(format!(" {} ", title.into()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

/// Informational text shown in place of an empty list
pub(crate) fn render_empty(frame: &mut Frame, app: &App, area: Rect, title: &str, message: &str) {
    let text = Paragraph::new(message)
        .block(panel_block(app, title))
        .style(Style::default().fg(Color::Blue))
        .wrap(Wrap { trim: true });
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::RecipeDraft;
    use crate::storage::Storage;
    use crate::tui::app::{NOTHING_TO_EDIT, NO_RECIPES};
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for row in buffer.content.chunks(buffer.area.width as usize) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("recipes.db"));
        storage.initialize().unwrap();
        (temp_dir, storage, Settings::default())
    }

    #[test]
    fn test_empty_screens_show_messages() {
        let (_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings);

        app.switch_view(ActiveView::ViewRecipes);
        assert!(screen_text(&app).contains(NO_RECIPES));

        app.switch_view(ActiveView::EditRecipe);
        assert!(screen_text(&app).contains(NOTHING_TO_EDIT));
    }

    #[test]
    fn test_expanded_recipe_shows_sections() {
        let (_dir, storage, settings) = setup();
        storage
            .recipes
            .create(&RecipeDraft::new("Pasta", "Pasta\nSalt", "Boil water"))
            .unwrap();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::ViewRecipes);

        let collapsed = screen_text(&app);
        assert!(collapsed.contains("Pasta"));
        assert!(!collapsed.contains("Ingredients:"));

        app.toggle_expanded();
        let expanded = screen_text(&app);
        assert!(expanded.contains("Ingredients:"));
        assert!(expanded.contains("Salt"));
        assert!(expanded.contains("Instructions:"));
        assert!(expanded.contains("Boil water"));
    }

    #[test]
    fn test_edit_screen_titles_form() {
        let (_dir, storage, settings) = setup();
        storage
            .recipes
            .create(&RecipeDraft::new("Soup", "Water", "Simmer"))
            .unwrap();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::EditRecipe);

        assert!(screen_text(&app).contains("Editing: Soup"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let (_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings);
        app.open_dialog(ActiveDialog::Help);
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
