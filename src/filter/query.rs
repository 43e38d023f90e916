//! Filter query types
//!
//! A [`FilterQuery`] bundles the three independent constraints the item list
//! can be narrowed by:
//! - `search_text`: free text matched against name, username and host
//! - `folder`: any folder, no folder, or one specific folder id
//! - `kind`: any type or one specific item type

use crate::export::{Folder, Item, ItemType};
use std::fmt;

/// Folder constraint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FolderSelector {
    #[default]
    Any,
    /// Only items without a folder
    NoFolder,
    /// Only items whose folder id equals this one
    Folder(String),
}

impl FolderSelector {
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::Any => true,
            Self::NoFolder => !item.has_folder(),
            Self::Folder(id) => item.folder() == Some(id.as_str()),
        }
    }

    /// Next selector in the cycle `Any -> NoFolder -> folders... -> Any`
    ///
    /// A selector naming a folder that is not in `folders` restarts the cycle.
    #[must_use]
    pub fn next(&self, folders: &[Folder]) -> Self {
        match self {
            Self::Any => Self::NoFolder,
            Self::NoFolder => folders
                .first()
                .map_or(Self::Any, |folder| Self::Folder(folder.id.clone())),
            Self::Folder(id) => folders
                .iter()
                .position(|folder| &folder.id == id)
                .and_then(|pos| folders.get(pos + 1))
                .map_or(Self::Any, |folder| Self::Folder(folder.id.clone())),
        }
    }
}

/// Item type constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeSelector {
    #[default]
    Any,
    Only(ItemType),
}

impl TypeSelector {
    #[must_use]
    pub fn matches(self, item: &Item) -> bool {
        match self {
            Self::Any => true,
            Self::Only(kind) => item.kind().map(ItemType::code) == Some(kind.code()),
        }
    }

    /// Next selector in the cycle `Any -> Login -> Note -> Card -> Identity -> Any`
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Any => Self::Only(ItemType::Login),
            Self::Only(kind) => ItemType::KNOWN
                .iter()
                .position(|known| *known == kind)
                .and_then(|pos| ItemType::KNOWN.get(pos + 1))
                .map_or(Self::Any, |next| Self::Only(*next)),
        }
    }
}

impl fmt::Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("All Types"),
            Self::Only(kind) => write!(f, "{kind}"),
        }
    }
}

/// Complete filter query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    pub search_text: String,
    pub folder: FolderSelector,
    pub kind: TypeSelector,
}

impl FilterQuery {
    /// A query that matches everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    #[must_use]
    pub fn with_folder(mut self, folder: FolderSelector) -> Self {
        self.folder = folder;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: TypeSelector) -> Self {
        self.kind = kind;
        self
    }

    /// Normalized search needle, `None` when search imposes no constraint
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        let needle = self.search_text.trim().to_lowercase();
        (!needle.is_empty()).then_some(needle)
    }

    /// True when no constraint is active
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.needle().is_none()
            && self.folder == FolderSelector::Any
            && self.kind == TypeSelector::Any
    }
}
