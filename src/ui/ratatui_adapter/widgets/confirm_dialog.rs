//! Confirmation dialog widget for destructive actions
//!
//! Shown before items are deleted. The action to run on confirmation is
//! held by the application state, the dialog only renders the question.

use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::ratatui_adapter::widgets::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Maximum item names listed under the question
const CONTEXT_LINES: usize = 3;

/// State for the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    /// The question, e.g. "Delete 3 selected items?"
    pub message: String,
    /// Names of the affected items
    pub context: Vec<String>,
}

impl ConfirmDialogState {
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            context: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: Vec<String>) -> Self {
        self.context = context;
        self
    }

    /// Context lines as rendered, with a "+N more" tail when truncated
    #[must_use]
    pub fn context_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .context
            .iter()
            .take(CONTEXT_LINES)
            .map(|name| format!("• {name}"))
            .collect();
        if self.context.len() > CONTEXT_LINES {
            lines.push(format!("+{} more", self.context.len() - CONTEXT_LINES));
        }
        lines
    }
}

/// Confirmation dialog overlay widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    #[must_use]
    pub const fn new(state: &'a ConfirmDialogState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ConfirmDialog<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let context = self.state.context_lines();

        let message_width = self.state.message.chars().count() as u16 + 4;
        let width = message_width
            .clamp(40, 70)
            .min(area.width.saturating_sub(4));
        let context_height = if context.is_empty() {
            0
        } else {
            context.len() as u16 + 1
        };
        let height = 7 + context_height;

        let modal_area = centered_rect(width, height, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(self.theme.warning)
                    .add_modifier(Modifier::BOLD),
            )
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message_area, context_area, _, buttons_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(context_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White))
            .render(message_area, buf);

        if !context.is_empty() {
            let mut lines = vec![Line::from("─".repeat(inner.width.saturating_sub(2) as usize))];
            lines.extend(context.into_iter().map(Line::from));
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(self.theme.dimmed_style())
                .render(context_area, buf);
        }

        let buttons = Line::from(vec![
            Span::styled(
                " [Y] Yes ",
                Style::default()
                    .fg(Color::Black)
                    .bg(self.theme.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                " [N] No ",
                Style::default()
                    .fg(Color::Black)
                    .bg(self.theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(buttons_area, buf);

        Paragraph::new("Y/Enter: confirm | N/Esc: cancel")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center)
            .render(help_area, buf);
    }
}
