//! Text input widget
//!
//! A single- or multi-line text field with a character-indexed cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// An editable text field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Whether Enter inserts a line break
    pub multiline: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new single-line text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Allow line breaks
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Replace the content verbatim, placing the cursor at the end
    ///
    /// Stored text may contain line breaks even in a single-line input; only
    /// typed line breaks are refused.
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a line break (multi-line inputs only)
    pub fn newline(&mut self) {
        self.insert('\n');
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start of the current line
    pub fn move_start(&mut self) {
        let (_, col) = self.cursor_line_col();
        self.cursor -= col;
    }

    /// Move cursor to the end of the current line
    pub fn move_end(&mut self) {
        let (line, col) = self.cursor_line_col();
        let len = self.line_lengths()[line];
        self.cursor += len - col;
    }

    /// Move cursor to the previous line, keeping the column where possible
    pub fn move_up(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line == 0 {
            return;
        }
        let lengths = self.line_lengths();
        self.cursor = self.line_start(&lengths, line - 1) + col.min(lengths[line - 1]);
    }

    /// Move cursor to the next line, keeping the column where possible
    pub fn move_down(&mut self) {
        let (line, col) = self.cursor_line_col();
        let lengths = self.line_lengths();
        if line + 1 >= lengths.len() {
            return;
        }
        self.cursor = self.line_start(&lengths, line + 1) + col.min(lengths[line + 1]);
    }

    /// Length in characters of each line
    fn line_lengths(&self) -> Vec<usize> {
        self.content.split('\n').map(|l| l.chars().count()).collect()
    }

    fn line_start(&self, lengths: &[usize], line: usize) -> usize {
        lengths[..line].iter().map(|len| len + 1).sum()
    }

    /// Zero-based (line, column) of the cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.content.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Content as styled lines, with the cursor cell highlighted when focused
    pub fn styled_lines(&self) -> Vec<Line<'static>> {
        if self.content.is_empty() && !self.focused {
            return vec![Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let text_style = Style::default().fg(Color::White);
        let cursor_style = Style::default().fg(Color::Black).bg(Color::Cyan);
        let (cursor_line, cursor_col) = self.cursor_line_col();

        self.content
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                if !self.focused || i != cursor_line {
                    return Line::from(Span::styled(line.to_string(), text_style));
                }
                let before: String = line.chars().take(cursor_col).collect();
                let mut rest = line.chars().skip(cursor_col);
                let at = rest.next().unwrap_or(' ');
                let after: String = rest.collect();
                Line::from(vec![
                    Span::styled(before, text_style),
                    Span::styled(at.to_string(), cursor_style),
                    Span::styled(after, text_style),
                ])
            })
            .collect()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_color, title_style) = if self.focused {
            (
                Color::Cyan,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (Color::DarkGray, Style::default().fg(Color::Yellow))
        };

        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        // Keep the cursor line visible
        let visible = area.height.saturating_sub(2) as usize;
        let (cursor_line, _) = self.cursor_line_col();
        let scroll = if visible > 0 && cursor_line >= visible {
            cursor_line + 1 - visible
        } else {
            0
        };

        Paragraph::new(self.styled_lines())
            .block(block)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .render(area, buf);
    }
}
