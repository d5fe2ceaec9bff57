//! Event handler for the TUI
//!
//! Routes key events to dialogs first, then to the active form while
//! editing, then to global keys and finally to the focused panel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.on_tick(),
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog.clone() {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::ConfirmDelete { id, title } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.confirm_delete(id, &title)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Error(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
}

fn handle_editing_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.stop_editing(),
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('s') if ctrl => app.submit(),
        KeyCode::Char('d') if ctrl && app.active_view == ActiveView::EditRecipe => {
            app.request_delete()
        }
        _ => {
            if let Some(form) = app.active_form_mut() {
                form.handle_key(key);
            }
        }
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('s') if ctrl => app.submit(),
        KeyCode::Char('d') if ctrl && app.active_view == ActiveView::EditRecipe => {
            app.request_delete()
        }
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('1') => app.switch_view(ActiveView::AddRecipe),
        KeyCode::Char('2') => app.switch_view(ActiveView::ViewRecipes),
        KeyCode::Char('3') => app.switch_view(ActiveView::EditRecipe),
        KeyCode::Tab => app.toggle_panel_focus(),
        KeyCode::Left | KeyCode::Char('h') => app.focused_panel = FocusedPanel::Sidebar,
        KeyCode::Right | KeyCode::Char('l') => app.focused_panel = FocusedPanel::Main,
        _ => match app.focused_panel {
            FocusedPanel::Sidebar => handle_sidebar_key(app, key),
            FocusedPanel::Main => handle_main_key(app, key),
        },
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(view) = ActiveView::ALL.get(app.sidebar_index).copied() {
                app.switch_view(view);
                app.focused_panel = FocusedPanel::Main;
            }
        }
        _ => {}
    }
}

fn handle_main_key(app: &mut App, key: KeyEvent) {
    match app.active_view {
        ActiveView::AddRecipe => {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i')
            ) {
                app.start_editing();
            }
        }
        ActiveView::ViewRecipes => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_expanded(),
            _ => {}
        },
        ActiveView::EditRecipe => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Enter | KeyCode::Char('e') => app.start_editing(),
            KeyCode::Char('d') => app.request_delete(),
            _ => {}
        },
    }
}
