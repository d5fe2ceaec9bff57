//! Status bar view
//!
//! Shows the active screen, the status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.active_view.label()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if app.input_mode == InputMode::Editing {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled("EDITING", Style::default().fg(Color::Green)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = key_hints(app);

    // Right-align the hints when there is room
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(app: &App) -> &'static str {
    match (app.input_mode, app.active_view) {
        (InputMode::Editing, ActiveView::EditRecipe) => {
            " Tab:Field  C-s:Update  C-d:Delete  Esc:Done "
        }
        (InputMode::Editing, _) => " Tab:Field  C-s:Save  Esc:Done ",
        (InputMode::Normal, _) => " q:Quit  ?:Help  1-3:Screen ",
    }
}
