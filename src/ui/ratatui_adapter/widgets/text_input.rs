//! Single-line text editing
//!
//! [`TextInputState`] backs the search field, the name field of the edit
//! dialog and the open-file prompt. [`TextInputModal`] draws the prompt.

use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::ratatui_adapter::widgets::centered_rect;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Editable line with a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    buffer: String,
    /// Cursor position (character index, not byte)
    cursor: usize,
}

impl TextInputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `text`, cursor at the end
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.chars().count();
        Self { buffer, cursor }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.byte_index();
            self.buffer.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        let byte_idx = self.byte_index();
        if byte_idx < self.buffer.len() {
            self.buffer.remove(byte_idx);
        }
    }

    pub const fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    pub const fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Delete the word before the cursor (Ctrl+W)
    pub fn delete_word_backwards(&mut self) {
        let byte_idx = self.byte_index();
        let trimmed = self.buffer[..byte_idx].trim_end();
        let new_end = trimmed
            .rfind(char::is_whitespace)
            .map_or(0, |space| space + 1);

        self.buffer.drain(new_end..byte_idx);
        self.cursor = self.buffer[..new_end].chars().count();
    }

    /// Apply an editing key
    ///
    /// Returns `true` if the key was consumed. Keys that are not editing
    /// keys (Enter, Esc, Tab, arrows up/down) are left to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('w') if ctrl => self.delete_word_backwards(),
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char('a') if ctrl => self.cursor_home(),
            KeyCode::Char('e') if ctrl => self.cursor_end(),
            KeyCode::Char(c) if !ctrl => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor_left(),
            KeyCode::Right => self.cursor_right(),
            KeyCode::Home => self.cursor_home(),
            KeyCode::End => self.cursor_end(),
            _ => return false,
        }
        true
    }

    /// Render the visible window of the buffer with a block cursor
    ///
    /// Long input scrolls so the cursor stays inside `width` columns.
    #[must_use]
    pub fn line(&self, width: usize, show_cursor: bool, theme: &Theme) -> Line<'static> {
        let total = self.buffer.chars().count();
        let width = width.max(1);
        let start = if total < width || self.cursor < width {
            0
        } else {
            self.cursor + 1 - width
        };

        let visible: Vec<char> = self.buffer.chars().skip(start).take(width).collect();
        let offset = self.cursor - start;

        if !show_cursor {
            return Line::from(visible.into_iter().collect::<String>());
        }

        let before: String = visible.iter().take(offset).collect();
        let at: String = visible.get(offset).map_or(" ".to_string(), char::to_string);
        let after: String = visible.iter().skip(offset + 1).collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(
                at,
                Style::default()
                    .bg(theme.focus)
                    .fg(Color::Black)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::raw(after),
        ])
    }
}

/// Modal prompt for a single line of text
pub struct TextInputModal<'a> {
    title: &'a str,
    state: &'a TextInputState,
    theme: &'a Theme,
}

impl<'a> TextInputModal<'a> {
    #[must_use]
    pub const fn new(title: &'a str, state: &'a TextInputState, theme: &'a Theme) -> Self {
        Self {
            title,
            state,
            theme,
        }
    }
}

impl Widget for TextInputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 70.min(area.width.saturating_sub(4));
        let modal_area = centered_rect(width, 6, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [field, help] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(inner);

        let field_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));
        let field_inner = field_block.inner(field);
        field_block.render(field, buf);

        Paragraph::new(self.state.line(field_inner.width as usize, true, self.theme))
            .render(field_inner, buf);

        Paragraph::new("Enter: submit | Esc: cancel")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center)
            .render(help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_input() {
        let mut state = TextInputState::new();
        for c in "gmail".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.value(), "gmail");
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn test_cursor_movement() {
        let mut state = TextInputState::with_text("hello");
        assert_eq!(state.cursor(), 5);

        state.cursor_left();
        assert_eq!(state.cursor(), 4);

        state.cursor_home();
        assert_eq!(state.cursor(), 0);
        state.cursor_left();
        assert_eq!(state.cursor(), 0);

        state.cursor_end();
        state.cursor_right();
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn test_backspace_and_delete_multibyte() {
        let mut state = TextInputState::with_text("café");
        state.backspace();
        assert_eq!(state.value(), "caf");

        state.cursor_home();
        state.delete();
        assert_eq!(state.value(), "af");

        state.cursor_home();
        state.backspace();
        assert_eq!(state.value(), "af");
    }

    #[test]
    fn test_handle_key() {
        let mut state = TextInputState::new();
        assert!(state.handle_key(key(KeyCode::Char('x'))));
        assert!(state.handle_key(key(KeyCode::Backspace)));
        assert!(!state.handle_key(key(KeyCode::Enter)));
        assert!(!state.handle_key(key(KeyCode::Esc)));
        assert_eq!(state.value(), "");

        state.insert_char('a');
        assert!(state.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert_eq!(state.value(), "");
    }

    #[test]
    fn test_delete_word_backwards() {
        let mut state = TextInputState::with_text("hello world");

        state.delete_word_backwards();
        assert_eq!(state.value(), "hello ");
        assert_eq!(state.cursor(), 6);

        state.delete_word_backwards();
        assert_eq!(state.value(), "");
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_line_scrolls_to_cursor() {
        let theme = Theme::dark();
        let state = TextInputState::with_text("abcdefghij");
        let line = state.line(4, false, &theme);
        assert_eq!(line.to_string(), "hij");

        let mut state = state;
        state.cursor_home();
        assert_eq!(state.line(4, false, &theme).to_string(), "abcd");
    }
}
