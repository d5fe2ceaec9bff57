//! Edit/Delete Recipe screen
//!
//! A selector of all recipes beside a form pre-filled with the selected
//! recipe's stored values.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::{panel_block, recipe_form, render_empty};
use crate::display::recipe::truncate;
use crate::tui::app::{App, FocusedPanel, InputMode, NOTHING_TO_EDIT};
use crate::tui::layout::EditLayout;

/// Render the selector and edit form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(selected) = app.selected_edit_recipe() else {
        render_empty(frame, app, area, "Recipes", NOTHING_TO_EDIT);
        return;
    };

    let layout = EditLayout::new(area);
    render_selector(frame, app, layout.selector);

    let block = panel_block(app, format!("Editing: {}", selected.title));
    let inner = block.inner(layout.form);
    frame.render_widget(block, layout.form);

    let hints: &[(&str, &str)] = if app.input_mode == InputMode::Editing {
        &[
            ("Ctrl+S", "Update Recipe"),
            ("Ctrl+D", "Delete Recipe"),
            ("Esc", "Done"),
        ]
    } else {
        &[("e", "Edit"), ("d", "Delete Recipe"), ("j/k", "Select")]
    };

    recipe_form::render(frame, inner, &app.edit.form, hints);
}

fn render_selector(frame: &mut Frame, app: &App, area: Rect) {
    let selecting = app.focused_panel == FocusedPanel::Main && app.input_mode == InputMode::Normal;
    let border_color = if selecting {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Select a recipe ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .recipes
        .iter()
        .map(|r| ListItem::new(truncate(&r.title, width.max(1))))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.edit.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}
