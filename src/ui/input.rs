//! Single-line query input backed by a textarea widget.

use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;
use tui_textarea::{CursorMove, TextArea};

pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
}

impl SearchInput<'_> {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Enter your programming question...");
        if !initial.is_empty() {
            textarea.insert_str(initial);
            textarea.move_cursor(CursorMove::End);
        }
        Self { textarea }
    }

    /// Current query text. The widget is used single-line, so only the
    /// first line matters.
    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Forwards a key event to the textarea. Returns whether the content
    /// changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn starts_with_initial_text_and_cursor_at_end() {
        let input = SearchInput::new("rust lifetimes");
        assert_eq!(input.text(), "rust lifetimes");
    }

    #[test]
    fn typing_appends_to_the_query() {
        let mut input = SearchInput::new("rus");
        let changed = input.input(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE));
        assert!(changed);
        assert_eq!(input.text(), "rust");
    }
}
