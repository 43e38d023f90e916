//! Data models for editor sessions
//!
//! Pure data handed from the session to whatever renders it: operation
//! outcomes, the rows of the current view and the statistics line. None of
//! these borrow from the session, so a frontend can hold a snapshot while it
//! forwards the next intent.

use crate::export::{ItemType, PLACEHOLDER};
use crate::selection::HeaderState;
use crate::ui::OutputWriter;
use std::fmt;

/// Name shown for items without one
pub const UNNAMED: &str = "Unnamed";

/// Result of a mutation operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The operation changed the session
    Success {
        affected_count: usize,
        details: String,
    },

    /// Nothing to do; the message explains why
    NoOp(String),

    /// The user declined a confirmation
    Cancelled,
}

impl ActionOutcome {
    pub(crate) fn success(affected_count: usize, details: impl Into<String>) -> Self {
        Self::Success {
            affected_count,
            details: details.into(),
        }
    }

    pub(crate) fn no_op(message: impl Into<String>) -> Self {
        Self::NoOp(message.into())
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub const fn affected_count(&self) -> Option<usize> {
        match self {
            Self::Success { affected_count, .. } => Some(*affected_count),
            _ => None,
        }
    }

    /// User-facing message, if the outcome has one
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { details, .. } => Some(details),
            Self::NoOp(message) => Some(message),
            Self::Cancelled => None,
        }
    }

    /// Send the outcome to an output channel
    ///
    /// Successes are reported as success, no-ops as info. Cancellation is
    /// silent.
    pub fn report(&self, output: &dyn OutputWriter) {
        match self {
            Self::Success { details, .. } => output.success(details),
            Self::NoOp(message) => output.info(message),
            Self::Cancelled => {}
        }
    }
}

/// Destination of a bulk move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTarget {
    /// Take the items out of every folder
    NoFolder,
    /// Put the items into the folder with this id
    Folder(String),
}

impl MoveTarget {
    /// Folder id written to moved items
    #[must_use]
    pub fn folder_id(&self) -> Option<&str> {
        match self {
            Self::NoFolder => None,
            Self::Folder(id) => Some(id),
        }
    }
}

/// One rendered row of the filtered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// Position in the filtered list
    pub index: usize,
    pub id: String,
    pub name: String,
    pub username: String,
    pub host: String,
    pub kind: Option<ItemType>,
    /// Folder display name
    pub folder: String,
    pub folder_id: Option<String>,
    pub selected: bool,
}

impl VisibleRow {
    #[must_use]
    pub fn type_label(&self) -> &'static str {
        self.kind.map_or(ItemType::Other(0).label(), ItemType::label)
    }

    pub(crate) fn or_placeholder(value: Option<&str>) -> String {
        value
            .filter(|v| !v.is_empty())
            .unwrap_or(PLACEHOLDER)
            .to_string()
    }
}

/// Counts shown in the statistics line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Items in the document
    pub total: usize,
    /// Items passing the active filter
    pub visible: usize,
    pub selected: usize,
    pub folders: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Items: {} | Selected: {} | Folders: {}",
            self.total, self.selected, self.folders
        )
    }
}

/// Everything a frontend needs to draw the item list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub rows: Vec<VisibleRow>,
    pub header: HeaderState,
    pub stats: Stats,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            header: HeaderState::Unchecked,
            stats: Stats::default(),
        }
    }
}
