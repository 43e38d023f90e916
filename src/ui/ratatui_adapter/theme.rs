//! Color theme definitions for the ratatui TUI

use crate::export::ItemType;
use crate::ui::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background of the row under the cursor
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    /// Checkbox color for selected rows
    pub checked: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub border: Color,
    /// Border of the focused pane
    pub focus: Color,
    /// Placeholders and secondary text
    pub dimmed: Color,
    pub header: Color,
    pub folder: Color,
    pub login: Color,
    pub note: Color,
    pub card: Color,
    pub identity: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            cursor_bg: Color::Blue,
            cursor_fg: Color::White,
            checked: Color::Green,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            focus: Color::Cyan,
            dimmed: Color::DarkGray,
            header: Color::Yellow,
            folder: Color::Magenta,
            login: Color::LightBlue,
            note: Color::LightYellow,
            card: Color::LightGreen,
            identity: Color::LightMagenta,
        }
    }

    /// Style for the row under the cursor
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .bg(self.cursor_bg)
            .fg(self.cursor_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn checked_style(&self) -> Style {
        Style::default()
            .fg(self.checked)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Border style, highlighted when the pane has focus
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.focus } else { self.border })
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn folder_style(&self) -> Style {
        Style::default().fg(self.folder)
    }

    /// Style for the type column
    #[must_use]
    pub fn type_style(&self, kind: Option<ItemType>) -> Style {
        let color = match kind {
            Some(ItemType::Login) => self.login,
            Some(ItemType::SecureNote) => self.note,
            Some(ItemType::Card) => self.card,
            Some(ItemType::Identity) => self.identity,
            Some(ItemType::Other(_)) | None => self.dimmed,
        };
        Style::default().fg(color)
    }

    /// Style for a status message of the given level
    #[must_use]
    pub fn message_style(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Normal => Style::default(),
            MessageLevel::Error => self.error_style(),
            MessageLevel::Success => self.success_style(),
            MessageLevel::Warning => self.warning_style(),
            MessageLevel::Info => self.info_style(),
        }
    }
}
