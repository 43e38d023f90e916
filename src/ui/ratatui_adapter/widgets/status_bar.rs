//! Status bar widget for displaying messages

use crate::session::Stats;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar showing the latest message on the left and the statistics
/// line on the right
pub struct StatusBar<'a> {
    message: Option<&'a (MessageLevel, String)>,
    stats: Stats,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(
        message: Option<&'a (MessageLevel, String)>,
        stats: Stats,
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            stats,
            theme,
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let stats = self.stats.to_string();
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(stats.chars().count() as u16 + 1),
        ])
        .areas(inner);

        if let Some((level, text)) = self.message {
            let style = self.theme.message_style(*level);
            Paragraph::new(Line::from(vec![
                Span::styled(Self::prefix_for_level(*level), style),
                Span::styled(text.as_str(), style),
            ]))
            .render(left, buf);
        }

        Paragraph::new(Line::styled(stats, self.theme.dimmed_style()))
            .right_aligned()
            .render(right, buf);
    }
}
