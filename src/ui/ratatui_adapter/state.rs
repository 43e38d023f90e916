//! Application state for the ratatui TUI
//!
//! Holds what the terminal UI needs between frames: the last snapshot of
//! the session, cursor and scroll position, the open overlay and the
//! status messages. The document itself stays in the `EditorSession`.

use crate::export::NO_FOLDER_LABEL;
use crate::filter::FolderSelector;
use crate::session::{EditorSession, Snapshot, VisibleRow};
use crate::ui::debounce::Debouncer;
use crate::ui::output::StatusBarWriter;
use crate::ui::ratatui_adapter::widgets::{
    ConfirmDialogState, EditDialogState, FolderPickerState, HEADER_HEIGHT, TextInputState,
};
use ratatui::layout::{Position, Rect};
use std::time::Duration;

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Confirmation dialog is active
    Confirm,
    /// Edit dialog is active
    Edit,
    /// Folder picker for a bulk move is active
    MovePicker,
    /// Open-file prompt is active
    Open,
}

/// Where keystrokes go in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Search,
}

/// Destructive action waiting for the confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteSelected,
    DeleteRow(String),
}

/// What a mouse position hits in the item table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableHit {
    Header,
    Row(usize),
}

/// Application state for the editor
#[derive(Debug)]
pub struct AppState {
    /// Rows and statistics as of the last refresh
    pub snapshot: Snapshot,
    /// Whether a document is loaded
    pub loaded: bool,
    pub folder_label: String,
    pub type_label: String,
    /// Cursor position in the visible rows
    pub cursor: usize,
    pub scroll_offset: usize,
    /// Number of rows that fit in the table (set during render)
    pub visible_height: usize,
    /// Table area of the last frame, used for mouse hit-testing
    pub table_area: Rect,
    pub focus: Focus,
    pub search: TextInputState,
    pub mode: Mode,
    pub messages: StatusBarWriter,
    pub confirm_state: Option<ConfirmDialogState>,
    pub pending: Option<PendingAction>,
    pub edit_state: Option<EditDialogState>,
    pub picker_state: Option<FolderPickerState>,
    pub open_state: Option<TextInputState>,
    pub debouncer: Debouncer,
    pub should_exit: bool,
}

impl AppState {
    #[must_use]
    pub fn new(search_debounce: Duration, message_ttl: Duration) -> Self {
        Self {
            snapshot: Snapshot::default(),
            loaded: false,
            folder_label: String::new(),
            type_label: String::new(),
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20,
            table_area: Rect::default(),
            focus: Focus::Table,
            search: TextInputState::new(),
            mode: Mode::Normal,
            messages: StatusBarWriter::with_ttl(message_ttl),
            confirm_state: None,
            pending: None,
            edit_state: None,
            picker_state: None,
            open_state: None,
            debouncer: Debouncer::new(search_debounce),
            should_exit: false,
        }
    }

    /// Pull a fresh snapshot from the session and keep the cursor in range
    pub fn refresh(&mut self, session: &EditorSession) {
        self.snapshot = session.snapshot();
        self.loaded = session.is_loaded();

        let query = session.query();
        self.folder_label = match &query.folder {
            FolderSelector::Any => "All Folders".to_string(),
            FolderSelector::NoFolder => NO_FOLDER_LABEL.to_string(),
            FolderSelector::Folder(id) => session.folder_name(Some(id)).to_string(),
        };
        self.type_label = query.kind.to_string();

        let len = self.snapshot.rows.len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        self.adjust_scroll();
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.snapshot.rows.len()
    }

    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    pub fn page_down(&mut self) {
        let max_cursor = self.row_count().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.row_count().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Move the cursor to `index` if it exists
    pub fn set_cursor(&mut self, index: usize) {
        if index < self.row_count() {
            self.cursor = index;
            self.adjust_scroll();
        }
    }

    /// Keep the cursor inside the viewport
    const fn adjust_scroll(&mut self) {
        let height = if self.visible_height == 0 {
            1
        } else {
            self.visible_height
        };
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Row under the cursor
    #[must_use]
    pub fn current_row(&self) -> Option<&VisibleRow> {
        self.snapshot.rows.get(self.cursor)
    }

    /// Map a terminal cell to the table header or a row index
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<TableHit> {
        let area = self.table_area;
        if area.height < 2 || !area.contains(Position::new(column, row)) {
            return None;
        }

        // Inside the block border
        let top = area.y + 1;
        let bottom = area.y + area.height - 1;
        if row < top || row >= bottom {
            return None;
        }
        if row < top + HEADER_HEIGHT {
            return Some(TableHit::Header);
        }

        let index = self.scroll_offset + usize::from(row - top - HEADER_HEIGHT);
        (index < self.row_count()).then_some(TableHit::Row(index))
    }

    /// Open the confirmation dialog for `action`
    pub fn open_confirm(&mut self, prompt: String, action: PendingAction, context: Vec<String>) {
        self.confirm_state = Some(ConfirmDialogState::new("Confirm", prompt).with_context(context));
        self.pending = Some(action);
        self.mode = Mode::Confirm;
    }

    /// Open the edit dialog for the row with `id`
    pub fn open_edit(&mut self, session: &EditorSession, id: &str) {
        let Some(item) = session.document().and_then(|doc| doc.find_item(id)) else {
            return;
        };
        self.edit_state = Some(EditDialogState::new(
            id,
            item.name(),
            item.folder(),
            session.folders(),
        ));
        self.mode = Mode::Edit;
    }

    /// Open the folder picker for the current selection
    pub fn open_picker(&mut self, session: &EditorSession) {
        self.picker_state = Some(FolderPickerState::new(
            session.folders(),
            session.selection().len(),
        ));
        self.mode = Mode::MovePicker;
    }

    pub fn open_prompt(&mut self, initial: &str) {
        self.open_state = Some(TextInputState::with_text(initial));
        self.mode = Mode::Open;
    }

    /// Close whatever overlay is open and return to normal mode
    pub fn close_overlay(&mut self) {
        self.confirm_state = None;
        self.pending = None;
        self.edit_state = None;
        self.picker_state = None;
        self.open_state = None;
        self.mode = Mode::Normal;
    }

    /// Names of the selected rows that are currently visible
    #[must_use]
    pub fn selected_names(&self) -> Vec<String> {
        self.snapshot
            .rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.name.clone())
            .collect()
    }
}
