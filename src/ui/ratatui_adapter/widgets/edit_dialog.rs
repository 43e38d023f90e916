//! Edit dialog for renaming an item and changing its folder

use crate::export::{Folder, NO_FOLDER_LABEL};
use crate::ui::ratatui_adapter::theme::Theme;
use crate::ui::ratatui_adapter::widgets::{TextInputState, centered_rect};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Field of the edit dialog that receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Name,
    Folder,
}

/// State for the edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialogState {
    pub item_id: String,
    pub name: TextInputState,
    /// `(folder id, label)`; the first entry is "No Folder"
    options: Vec<(Option<String>, String)>,
    folder_index: usize,
    pub field: EditField,
    /// Last validation failure, shown under the fields
    pub error: Option<String>,
}

impl EditDialogState {
    /// Dialog prefilled with the item's current name and folder
    ///
    /// A folder id missing from the catalog falls back to "No Folder".
    #[must_use]
    pub fn new(
        item_id: impl Into<String>,
        name: &str,
        folder_id: Option<&str>,
        folders: &[Folder],
    ) -> Self {
        let options: Vec<(Option<String>, String)> =
            std::iter::once((None, NO_FOLDER_LABEL.to_string()))
                .chain(
                    folders
                        .iter()
                        .map(|f| (Some(f.id.clone()), f.name.clone())),
                )
                .collect();
        let folder_index = folder_id
            .and_then(|id| options.iter().position(|(opt, _)| opt.as_deref() == Some(id)))
            .unwrap_or(0);

        Self {
            item_id: item_id.into(),
            name: TextInputState::with_text(name),
            options,
            folder_index,
            field: EditField::Name,
            error: None,
        }
    }

    /// Folder id the item will get on save
    #[must_use]
    pub fn folder_id(&self) -> Option<&str> {
        self.options
            .get(self.folder_index)
            .and_then(|(id, _)| id.as_deref())
    }

    #[must_use]
    pub fn folder_label(&self) -> &str {
        self.options
            .get(self.folder_index)
            .map_or(NO_FOLDER_LABEL, |(_, label)| label.as_str())
    }

    pub fn next_folder(&mut self) {
        self.folder_index = (self.folder_index + 1) % self.options.len().max(1);
    }

    pub fn previous_folder(&mut self) {
        let len = self.options.len().max(1);
        self.folder_index = (self.folder_index + len - 1) % len;
    }

    pub const fn switch_field(&mut self) {
        self.field = match self.field {
            EditField::Name => EditField::Folder,
            EditField::Folder => EditField::Name,
        };
    }
}

/// Edit dialog overlay widget
pub struct EditDialog<'a> {
    state: &'a EditDialogState,
    theme: &'a Theme,
}

impl<'a> EditDialog<'a> {
    #[must_use]
    pub const fn new(state: &'a EditDialogState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn field_block(&self, title: &'static str, field: EditField) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.state.field == field))
            .title(title)
    }
}

impl Widget for EditDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 60.min(area.width.saturating_sub(4));
        let modal_area = centered_rect(width, 11, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(" Edit Item ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [name_area, folder_area, error_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let name_block = self.field_block(" Name ", EditField::Name);
        let name_inner = name_block.inner(name_area);
        name_block.render(name_area, buf);
        Paragraph::new(self.state.name.line(
            name_inner.width as usize,
            self.state.field == EditField::Name,
            self.theme,
        ))
        .render(name_inner, buf);

        let folder_style = if self.state.field == EditField::Folder {
            self.theme.folder_style()
        } else {
            self.theme.dimmed_style()
        };
        Paragraph::new(Line::from(vec![
            Span::styled("◀ ", self.theme.dimmed_style()),
            Span::styled(self.state.folder_label(), folder_style),
            Span::styled(" ▶", self.theme.dimmed_style()),
        ]))
        .block(self.field_block(" Folder ", EditField::Folder))
        .render(folder_area, buf);

        if let Some(error) = &self.state.error {
            Paragraph::new(Span::styled(error.as_str(), self.theme.error_style()))
                .alignment(Alignment::Center)
                .render(error_area, buf);
        }

        Paragraph::new("Tab: next field | ←/→: folder | Enter: save | Esc: cancel")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center)
            .render(help_area, buf);
    }
}
