//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::state::{Focus, Mode};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Space", "ctrl+s")
    pub key: String,
    pub action: String,
}

impl KeyHint {
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the current mode and focus
    #[must_use]
    pub fn hints_for(mode: Mode, focus: Focus) -> Vec<KeyHint> {
        match (mode, focus) {
            (Mode::Normal, Focus::Table) => vec![
                KeyHint::new("Space", "select"),
                KeyHint::new("a/n", "all/none"),
                KeyHint::new("Del", "delete"),
                KeyHint::new("m", "move"),
                KeyHint::new("e", "edit"),
                KeyHint::new("/", "search"),
                KeyHint::new("w", "export"),
                KeyHint::new("?", "help"),
                KeyHint::new("q", "quit"),
            ],
            (Mode::Normal, Focus::Search) => vec![
                KeyHint::new("Enter", "apply"),
                KeyHint::new("Esc", "back to list"),
                KeyHint::new("ctrl+u", "clear"),
            ],
            (Mode::Edit, _) => vec![
                KeyHint::new("Tab", "next field"),
                KeyHint::new("←/→", "folder"),
                KeyHint::new("Enter", "save"),
                KeyHint::new("Esc", "cancel"),
            ],
            (Mode::MovePicker, _) => vec![
                KeyHint::new("↑/↓", "choose"),
                KeyHint::new("Enter", "move"),
                KeyHint::new("Esc", "cancel"),
            ],
            (Mode::Confirm, _) => vec![
                KeyHint::new("y", "confirm"),
                KeyHint::new("n", "cancel"),
            ],
            (Mode::Open, _) => vec![
                KeyHint::new("Enter", "open"),
                KeyHint::new("Esc", "cancel"),
            ],
            (Mode::Help, _) => vec![KeyHint::new("Esc", "close help")],
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.info_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
