//! Ratatui widgets for the export editor

mod confirm_dialog;
mod edit_dialog;
mod folder_picker;
mod help_bar;
mod help_overlay;
mod item_table;
mod search_bar;
mod status_bar;
mod text_input;

pub use confirm_dialog::{ConfirmDialog, ConfirmDialogState};
pub use edit_dialog::{EditDialog, EditDialogState, EditField};
pub use folder_picker::{FolderPicker, FolderPickerState};
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use item_table::{HEADER_HEIGHT, ItemTable};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use text_input::{TextInputModal, TextInputState};

use ratatui::layout::Rect;

/// Fixed-size area centered in `area`, shrunk to fit
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
