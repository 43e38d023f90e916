//! Selection tracking
//!
//! The set of selected item ids plus the index of the last row the user
//! interacted with. Operations that depend on what is on screen take the
//! current filtered list, so selection semantics always follow the active
//! filter while the set itself may keep ids that are currently hidden.
//!
//! Ids never outlive their items: callers reconcile against the document
//! after every removal.

use crate::export::Item;
use std::collections::HashSet;

/// Tri-state header indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    /// Every visible item is selected (and there is at least one)
    Checked,
    /// Some but not all visible items are selected
    Indeterminate,
    Unchecked,
}

impl HeaderState {
    /// Checkbox glyph used by text renderers
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Checked => "[x]",
            Self::Indeterminate => "[-]",
            Self::Unchecked => "[ ]",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<String>,
    last_interacted: Option<usize>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    #[must_use]
    pub const fn last_interacted(&self) -> Option<usize> {
        self.last_interacted
    }

    /// Flip the selection state of one id
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Add every item in the inclusive index range, in either direction
    ///
    /// Never removes anything. Indices past the end clamp to the last row.
    pub fn select_range(&mut self, visible: &[&Item], from: usize, to: usize) {
        let Some(last) = visible.len().checked_sub(1) else {
            return;
        };
        let start = from.min(to).min(last);
        let end = from.max(to).min(last);

        for item in &visible[start..=end] {
            self.selected.insert(item.id().to_owned());
        }
    }

    /// Apply a checkbox click on the row at `index`
    ///
    /// With the range modifier and an existing anchor, selects the range
    /// between the anchor and `index`; otherwise toggles `id`. The clicked
    /// index becomes the new anchor either way.
    pub fn handle_click(&mut self, visible: &[&Item], id: &str, index: usize, range: bool) {
        match self.last_interacted {
            Some(anchor) if range => self.select_range(visible, anchor, index),
            _ => self.toggle(id),
        }
        self.last_interacted = Some(index);
    }

    pub fn select_all_visible(&mut self, visible: &[&Item]) {
        self.selected
            .extend(visible.iter().map(|item| item.id().to_owned()));
    }

    /// Clear the selection and forget the range anchor
    pub fn deselect_all(&mut self) {
        self.selected.clear();
        self.last_interacted = None;
    }

    /// Deselect the visible items if all are selected, else select them all
    pub fn toggle_all_visible(&mut self, visible: &[&Item]) {
        if visible.is_empty() {
            return;
        }

        if self.all_selected(visible) {
            for item in visible {
                self.selected.remove(item.id());
            }
        } else {
            self.select_all_visible(visible);
        }
    }

    #[must_use]
    pub fn header(&self, visible: &[&Item]) -> HeaderState {
        let selected = visible
            .iter()
            .filter(|item| self.selected.contains(item.id()))
            .count();

        if selected == 0 {
            HeaderState::Unchecked
        } else if selected == visible.len() {
            HeaderState::Checked
        } else {
            HeaderState::Indeterminate
        }
    }

    /// Drop every id that is not in `valid`
    ///
    /// Returns how many ids were dropped.
    pub fn reconcile(&mut self, valid: &HashSet<&str>) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| valid.contains(id.as_str()));
        before - self.selected.len()
    }

    fn all_selected(&self, visible: &[&Item]) -> bool {
        visible.iter().all(|item| self.selected.contains(item.id()))
    }
}
