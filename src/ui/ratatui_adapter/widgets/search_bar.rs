//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::ratatui_adapter::widgets::TextInputState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search by name, username or URL...";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    focused: bool,
    /// A keystroke is waiting for the debounce to apply it
    pending: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(input: &'a TextInputState, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            focused: false,
            pending: false,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.pending { " Search … " } else { " Search " };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.input.value().is_empty() && !self.focused {
            Line::from(Span::styled(PLACEHOLDER, self.theme.dimmed_style()))
        } else {
            self.input
                .line(inner.width as usize, self.focused, self.theme)
        };

        Paragraph::new(line).render(inner, buf);
    }
}
