//! Help dialog
//!
//! Shows keyboard shortcuts for the active screen

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help text for `view`
pub fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1/2/3", "Add, View, Edit/Delete screen"),
        key_line("Tab", "Switch panel focus"),
        key_line("h/l", "Move focus left/right"),
        key_line("j/k", "Move selection up/down"),
        Line::from(""),
    ];

    match view {
        ActiveView::AddRecipe => {
            lines.push(section("Add Recipe"));
            lines.push(key_line("Enter", "Start typing in the form"));
            lines.push(key_line("Ctrl+S", "Add the recipe"));
        }
        ActiveView::ViewRecipes => {
            lines.push(section("View Recipes"));
            lines.push(key_line("Enter/Space", "Expand or collapse a recipe"));
        }
        ActiveView::EditRecipe => {
            lines.push(section("Edit/Delete Recipe"));
            lines.push(key_line("j/k", "Choose the recipe to edit"));
            lines.push(key_line("e/Enter", "Edit the selected recipe"));
            lines.push(key_line("Ctrl+S", "Save changes"));
            lines.push(key_line("d/Ctrl+D", "Delete the selected recipe"));
        }
    }

    if view != ActiveView::ViewRecipes {
        lines.push(Line::from(""));
        lines.push(section("In a Form"));
        lines.push(key_line("Tab", "Next field (Shift+Tab: previous)"));
        lines.push(key_line("Enter", "New line; next field from Title"));
        lines.push(key_line("Esc", "Leave the form"));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
