//! Sidebar view
//!
//! Shows the app header and the three-item screen menu

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SidebarLayout::new(area);
    render_header(frame, layout.header);
    render_menu(frame, app, layout.menu);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Recipe Book ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

fn render_menu(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = ActiveView::ALL
        .iter()
        .map(|view| {
            let is_active = app.active_view == *view;
            let style = if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let indicator = if is_active { "▶" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(
                    format!("[{}] ", view.index() + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(view.label(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    // Only show the cursor row while the sidebar has focus
    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.sidebar_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
