//! Add Recipe screen

use ratatui::{layout::Rect, Frame};

use super::{panel_block, recipe_form};
use crate::tui::app::{App, InputMode};

/// Render the add form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel_block(app, "New Recipe");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hints: &[(&str, &str)] = if app.input_mode == InputMode::Editing {
        &[("Ctrl+S", "Add Recipe"), ("Tab", "Next field"), ("Esc", "Done")]
    } else {
        &[("Enter", "Start typing"), ("Ctrl+S", "Add Recipe")]
    };

    recipe_form::render(frame, inner, &app.add_form, hints);
}
