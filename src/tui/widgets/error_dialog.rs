//! Error dialog widget
//!
//! Displays error details with recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::RecipeError;

/// Error details shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub title: String,
    pub details: String,
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Build error info from a `RecipeError`
    pub fn from_error(error: &RecipeError) -> Self {
        let (title, details, suggestions): (&str, String, Vec<&str>) = match error {
            RecipeError::Config(msg) => (
                "Configuration Error",
                msg.clone(),
                vec![
                    "Check config.json for syntax errors",
                    "Run 'recipes init' to write default settings",
                ],
            ),
            RecipeError::Io(msg) => (
                "I/O Error",
                msg.clone(),
                vec![
                    "Check that you have write permissions to the data directory",
                    "Ensure there is enough disk space",
                ],
            ),
            RecipeError::Json(msg) | RecipeError::Yaml(msg) | RecipeError::Csv(msg) => (
                "Serialization Error",
                msg.clone(),
                vec!["Check the file contents and try again"],
            ),
            RecipeError::Database(msg) => (
                "Database Error",
                msg.clone(),
                vec![
                    "Check that the database file is readable and not corrupted",
                    "Close other programs that may hold a lock on it",
                ],
            ),
            RecipeError::Validation(msg) => (
                "Validation Error",
                msg.clone(),
                vec!["Fill in the title, ingredients and instructions"],
            ),
            RecipeError::NotFound {
                entity_type,
                identifier,
            } => {
                return Self {
                    title: format!("{} Not Found", entity_type),
                    details: format!(
                        "Could not find {} '{}'",
                        entity_type.to_lowercase(),
                        identifier
                    ),
                    suggestions: vec!["It may have been deleted; reload the list".into()],
                }
            }
            RecipeError::Export(msg) => (
                "Export Error",
                msg.clone(),
                vec!["Check that you have write permissions to the output path"],
            ),
        };

        Self {
            title: title.to_string(),
            details,
            suggestions: suggestions.into_iter().map(String::from).collect(),
        }
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Error: {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let mut lines = vec![Line::from(Span::styled(
                "Suggestions:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];
            lines.extend(
                self.error
                    .suggestions
                    .iter()
                    .map(|s| Line::from(format!("  - {}", s))),
            );

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Area for an error dialog, centred in `parent`
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 70 / 100).clamp(40, 80).min(parent.width);
    let height = (parent.height * 50 / 100).clamp(10, 16).min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
