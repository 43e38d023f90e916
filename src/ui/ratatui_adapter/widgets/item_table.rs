//! Item table widget
//!
//! One row per visible item with a checkbox column. The header checkbox
//! shows the tri-state selection of the filtered list.

use crate::session::Snapshot;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

/// Rows taken by the header line inside the block
pub const HEADER_HEIGHT: u16 = 1;

const COLUMNS: [Constraint; 6] = [
    Constraint::Length(4),
    Constraint::Percentage(28),
    Constraint::Percentage(22),
    Constraint::Percentage(22),
    Constraint::Length(9),
    Constraint::Fill(1),
];

/// Table of the filtered items
pub struct ItemTable<'a> {
    snapshot: &'a Snapshot,
    cursor: usize,
    scroll_offset: usize,
    theme: &'a Theme,
    focused: bool,
    empty_message: &'a str,
}

impl<'a> ItemTable<'a> {
    #[must_use]
    pub const fn new(snapshot: &'a Snapshot, theme: &'a Theme) -> Self {
        Self {
            snapshot,
            cursor: 0,
            scroll_offset: 0,
            theme,
            focused: true,
            empty_message: "No items match the current filter",
        }
    }

    #[must_use]
    pub const fn cursor(mut self, cursor: usize, scroll_offset: usize) -> Self {
        self.cursor = cursor;
        self.scroll_offset = scroll_offset;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Text shown when there are no rows
    #[must_use]
    pub const fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    fn checkbox(&self, selected: bool) -> Span<'static> {
        if selected {
            Span::styled("[x]", self.theme.checked_style())
        } else {
            Span::styled("[ ]", self.theme.dimmed_style())
        }
    }

    fn header(&self) -> Row<'static> {
        let style = self.theme.header_style();
        Row::new([
            Cell::from(self.snapshot.header.glyph()),
            Cell::from("Name"),
            Cell::from("Username"),
            Cell::from("URL"),
            Cell::from("Type"),
            Cell::from("Folder"),
        ])
        .style(style)
    }
}

/// Style a cell, dimming the placeholder
fn text_cell<'a>(text: &'a str, style: Style, theme: &Theme) -> Cell<'a> {
    if text == crate::export::PLACEHOLDER {
        Cell::from(Span::styled(text, theme.dimmed_style()))
    } else {
        Cell::from(Span::styled(text, style))
    }
}

impl Widget for ItemTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stats = self.snapshot.stats;
        let title = format!(" Items ({}/{}) ", stats.visible, stats.total);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .title(title);

        if self.snapshot.rows.is_empty() {
            Paragraph::new(Span::styled(self.empty_message, self.theme.dimmed_style()))
                .centered()
                .block(block)
                .render(area, buf);
            return;
        }

        let inner_height = block.inner(area).height.saturating_sub(HEADER_HEIGHT) as usize;
        let end = (self.scroll_offset + inner_height).min(self.snapshot.rows.len());
        let start = self.scroll_offset.min(end);

        let rows: Vec<Row> = self.snapshot.rows[start..end]
            .iter()
            .map(|row| {
                let cells = [
                    Cell::from(self.checkbox(row.selected)),
                    text_cell(&row.name, Style::default(), self.theme),
                    text_cell(&row.username, Style::default(), self.theme),
                    text_cell(&row.host, Style::default(), self.theme),
                    Cell::from(Span::styled(row.type_label(), self.theme.type_style(row.kind))),
                    text_cell(&row.folder, self.theme.folder_style(), self.theme),
                ];
                let table_row = Row::new(cells);
                if row.index == self.cursor && self.focused {
                    table_row.style(self.theme.cursor_style())
                } else {
                    table_row
                }
            })
            .collect();

        Table::new(rows, COLUMNS)
            .header(self.header())
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}
