//! Recipe form shared by the Add and Edit screens
//!
//! Holds the three text fields, which one has focus, and the key handling
//! for text entry. Submission lives on [`App`](crate::tui::app::App).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{Recipe, RecipeDraft};
use crate::tui::layout::FormLayout;
use crate::tui::widgets::input::TextInput;

/// Which field of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeField {
    #[default]
    Title,
    Ingredients,
    Instructions,
}

impl RecipeField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Ingredients,
            Self::Ingredients => Self::Instructions,
            Self::Instructions => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Instructions,
            Self::Ingredients => Self::Title,
            Self::Instructions => Self::Ingredients,
        }
    }
}

/// State for a recipe form
#[derive(Debug, Clone)]
pub struct RecipeFormState {
    pub title: TextInput,
    pub ingredients: TextInput,
    pub instructions: TextInput,
    pub focused_field: RecipeField,
}

impl Default for RecipeFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeFormState {
    /// An empty form
    pub fn new() -> Self {
        Self {
            title: TextInput::new()
                .label("Title")
                .placeholder("e.g. Tomato Soup"),
            ingredients: TextInput::new()
                .label("Ingredients (one per line)")
                .placeholder("2 cups flour\n1 tsp salt")
                .multiline(true),
            instructions: TextInput::new()
                .label("Instructions")
                .placeholder("Describe the preparation steps")
                .multiline(true),
            focused_field: RecipeField::Title,
        }
    }

    /// A form pre-filled with a stored recipe's current values
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut form = Self::new();
        form.title.set_value(recipe.title.as_str());
        form.ingredients.set_value(recipe.ingredients.as_str());
        form.instructions.set_value(recipe.instructions.as_str());
        form
    }

    /// Current field values as a draft, untrimmed
    pub fn draft(&self) -> RecipeDraft {
        RecipeDraft::new(
            self.title.value(),
            self.ingredients.value(),
            self.instructions.value(),
        )
    }

    /// Move focus to `field` and mark it as the active input
    pub fn set_focus(&mut self, field: RecipeField) {
        self.focused_field = field;
        self.title.focused = field == RecipeField::Title;
        self.ingredients.focused = field == RecipeField::Ingredients;
        self.instructions.focused = field == RecipeField::Instructions;
    }

    /// Remove the cursor from every field
    pub fn blur(&mut self) {
        self.title.focused = false;
        self.ingredients.focused = false;
        self.instructions.focused = false;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            RecipeField::Title => &mut self.title,
            RecipeField::Ingredients => &mut self.ingredients,
            RecipeField::Instructions => &mut self.instructions,
        }
    }

    /// Apply a text-entry key to the focused field
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Enter if self.focused_field == RecipeField::Title => self.focus_next(),
            KeyCode::Enter => self.focused_input_mut().newline(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.focused_input_mut().insert(c)
            }
            KeyCode::Backspace => self.focused_input_mut().backspace(),
            KeyCode::Delete => self.focused_input_mut().delete(),
            KeyCode::Left => self.focused_input_mut().move_left(),
            KeyCode::Right => self.focused_input_mut().move_right(),
            KeyCode::Up => self.focused_input_mut().move_up(),
            KeyCode::Down => self.focused_input_mut().move_down(),
            KeyCode::Home => self.focused_input_mut().move_start(),
            KeyCode::End => self.focused_input_mut().move_end(),
            _ => {}
        }
    }
}

/// Render the three fields plus a hint line
pub fn render(frame: &mut Frame, area: Rect, form: &RecipeFormState, hints: &[(&str, &str)]) {
    let layout = FormLayout::new(area);

    frame.render_widget(&form.title, layout.title);
    frame.render_widget(&form.ingredients, layout.ingredients);
    frame.render_widget(&form.instructions, layout.instructions);

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {}  ", action)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), layout.hints);
}
