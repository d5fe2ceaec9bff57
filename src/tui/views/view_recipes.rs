//! View Recipes screen
//!
//! Every recipe is a collapsible header; expanding one shows its ingredients
//! and instructions verbatim.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{panel_block, render_empty};
use crate::models::Recipe;
use crate::tui::app::{App, FocusedPanel, NO_RECIPES};

/// Render the recipe list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.recipes.is_empty() {
        render_empty(frame, app, area, "Recipes", NO_RECIPES);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;

    for (index, recipe) in app.recipes.iter().enumerate() {
        let is_selected = index == app.browse.selected_index;
        let is_expanded = app.browse.expanded.contains(&recipe.id);
        if is_selected {
            selected_line = lines.len();
        }

        lines.push(header_line(
            recipe,
            is_selected && app.focused_panel == FocusedPanel::Main,
            is_expanded,
        ));
        if is_expanded {
            lines.extend(detail_lines(recipe));
        }
    }

    let block = panel_block(app, format!("Recipes ({})", app.recipes.len()));

    // Keep the highlighted header on screen
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = if visible > 0 && selected_line >= visible {
        selected_line + 1 - visible
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, area);
}

fn header_line(recipe: &Recipe, highlighted: bool, expanded: bool) -> Line<'static> {
    let marker = if expanded { "▼" } else { "▶" };
    let mut style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    if highlighted {
        style = style.bg(Color::DarkGray);
    }

    Line::from(vec![
        Span::styled(format!("{} ", marker), Style::default().fg(Color::Cyan)),
        Span::styled(recipe.title.clone(), style),
    ])
}

fn detail_lines(recipe: &Recipe) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled("    Ingredients:", heading))];
    lines.extend(
        recipe
            .ingredients
            .lines()
            .map(|l| Line::from(format!("      {}", l))),
    );
    lines.push(Line::from(Span::styled("    Instructions:", heading)));
    lines.extend(
        recipe
            .instructions
            .lines()
            .map(|l| Line::from(format!("      {}", l))),
    );
    lines.push(Line::from(""));
    lines
}
