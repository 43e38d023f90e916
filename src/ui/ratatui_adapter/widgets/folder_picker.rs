//! Folder picker for moving the selection

use crate::export::{Folder, NO_FOLDER_LABEL};
use crate::session::MoveTarget;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::ratatui_adapter::widgets::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Label of the entry that chooses nothing
pub const NO_CHOICE_LABEL: &str = "Move to Folder...";

/// State for the folder picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPickerState {
    /// `None` is the leading "nothing chosen" entry
    options: Vec<(Option<MoveTarget>, String)>,
    pub cursor: usize,
    /// Number of items that will move
    pub selected_count: usize,
}

impl FolderPickerState {
    #[must_use]
    pub fn new(folders: &[Folder], selected_count: usize) -> Self {
        let options = [
            (None, NO_CHOICE_LABEL.to_string()),
            (Some(MoveTarget::NoFolder), NO_FOLDER_LABEL.to_string()),
        ]
        .into_iter()
        .chain(
            folders
                .iter()
                .map(|f| (Some(MoveTarget::Folder(f.id.clone())), f.name.clone())),
        )
        .collect();

        Self {
            options,
            cursor: 0,
            selected_count,
        }
    }

    /// Target under the cursor; `None` when nothing is chosen
    #[must_use]
    pub fn target(&self) -> Option<MoveTarget> {
        self.options
            .get(self.cursor)
            .and_then(|(target, _)| target.clone())
    }

    pub const fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Folder picker overlay widget
pub struct FolderPicker<'a> {
    state: &'a FolderPickerState,
    theme: &'a Theme,
}

impl<'a> FolderPicker<'a> {
    #[must_use]
    pub const fn new(state: &'a FolderPickerState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for FolderPicker<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (self.state.len() as u16 + 2).min(area.height.saturating_sub(4).max(3));
        let width = 44.min(area.width.saturating_sub(4));
        let modal_area = centered_rect(width, height, area);

        Clear.render(modal_area, buf);

        let title = format!(" Move {} selected ", self.state.selected_count);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(title)
            .title_alignment(Alignment::Center);

        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .map(|(target, label)| {
                let style = if target.is_none() {
                    self.theme.dimmed_style()
                } else {
                    self.theme.folder_style()
                };
                ListItem::new(Line::from(Span::styled(label.as_str(), style)))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.cursor_style())
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, modal_area, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_chooses_nothing() {
        let picker = FolderPickerState::new(&[Folder::new("f1", "Work")], 2);
        assert_eq!(picker.len(), 3);
        assert_eq!(picker.target(), None);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut picker = FolderPickerState::new(&[Folder::new("f1", "Work")], 2);
        picker.up();
        assert_eq!(picker.cursor, 0);

        picker.down();
        assert_eq!(picker.target(), Some(MoveTarget::NoFolder));
        picker.down();
        assert_eq!(picker.target(), Some(MoveTarget::Folder("f1".into())));
        picker.down();
        assert_eq!(picker.cursor, 2);
    }
}
