//! Help overlay widget for displaying full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("↑/↓ j/k", "Move cursor"),
            ("PgUp/PgDn", "Page up/down"),
            ("Home/End", "Jump to first/last row"),
            ("/", "Focus search"),
            ("Esc", "Back to the list"),
        ],
    ),
    (
        "Selection",
        &[
            ("Space", "Toggle row"),
            ("v, shift+Space", "Select range from last row"),
            ("a", "Select all visible"),
            ("n", "Deselect all"),
            ("t", "Toggle all visible"),
            ("click", "Toggle row"),
            ("shift+click", "Select range"),
        ],
    ),
    (
        "Actions",
        &[
            ("Del, d", "Delete selected"),
            ("x", "Delete row under cursor"),
            ("e, Enter", "Edit row under cursor"),
            ("m", "Move selected to folder"),
            ("f", "Cycle folder filter"),
            ("y", "Cycle type filter"),
            ("w, ctrl+s", "Export"),
            ("o", "Open another export"),
            ("q, ctrl+c", "Quit"),
        ],
    ),
];

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let [_, middle, _] = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .areas(area);

        let [_, center, _] = Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .areas(middle);
        center
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (title, binds) in SECTIONS {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("  {title}"),
                self.theme.header_style().add_modifier(Modifier::UNDERLINED),
            ));
            lines.push(Line::default());
            lines.extend(binds.iter().map(|&(key, desc)| self.help_line(key, desc)));
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));
        lines
    }

    fn help_line(&self, key: &str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<16}"), self.theme.info_style()),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_section() {
        let theme = Theme::dark();
        let text: Vec<String> = HelpOverlay::new(&theme)
            .build_content()
            .iter()
            .map(ToString::to_string)
            .collect();

        for (title, _) in SECTIONS {
            assert!(text.iter().any(|line| line.trim() == *title));
        }
        assert!(text.iter().any(|line| line.contains("Delete selected")));
    }
}
