//! Export document model
//!
//! Parsing, lookup and serialization of Bitwarden JSON exports. The model is
//! deliberately permissive: the only structural requirement is an object root
//! carrying an `items` array. Fields the editor does not understand are kept
//! verbatim so a saved export differs from the loaded one only where the user
//! changed something.
//!
//! # Example
//!
//! ```
//! use bwedit::export;
//!
//! let doc = export::load(br#"{"items": [{"id": "a", "name": "Gmail", "type": 1}]}"#).unwrap();
//! assert_eq!(doc.items.len(), 1);
//! assert_eq!(doc.folder_name(None), "-");
//! ```

pub mod error;
pub mod types;

pub use error::LoadError;
pub use types::{Folder, Item, ItemId, ItemType};

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// Placeholder shown for missing folders, usernames and hosts
pub const PLACEHOLDER: &str = "-";

/// Label used when items are moved out of every folder
pub const NO_FOLDER_LABEL: &str = "No Folder";

/// A loaded export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// `encrypted` flag as found in the source; `None` when absent
    pub encrypted: Option<bool>,
    /// Folder catalog; `None` when the source had no `folders` array
    pub folders: Option<Vec<Folder>>,
    /// Items in document order
    pub items: Vec<Item>,
}

/// Borrowed shape written back to disk
#[derive(Serialize)]
struct ExportView<'a> {
    encrypted: bool,
    folders: &'a [Folder],
    items: &'a [Item],
}

/// Parse an export from raw bytes
///
/// # Errors
///
/// Returns [`LoadError::Json`] for malformed JSON and
/// [`LoadError::InvalidFormat`] when the root is not an object or lacks an
/// `items` array. Entries of `items` and `folders` are accepted whatever
/// their shape.
pub fn load(bytes: &[u8]) -> Result<Document, LoadError> {
    let root: Value = serde_json::from_slice(bytes)?;

    let Value::Object(mut root) = root else {
        return Err(LoadError::InvalidFormat(
            "root must be a JSON object".to_string(),
        ));
    };

    let items = match root.remove("items") {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(LoadError::InvalidFormat(
                "`items` must be an array".to_string(),
            ));
        }
        None => {
            return Err(LoadError::InvalidFormat(
                "missing `items` array".to_string(),
            ));
        }
    };

    let items = items.into_iter().map(Item::from).collect();

    let folders = match root.remove("folders") {
        Some(Value::Array(folders)) => Some(folders.into_iter().map(Folder::from).collect()),
        _ => None,
    };

    let encrypted = root.get("encrypted").and_then(Value::as_bool);

    Ok(Document {
        encrypted,
        folders,
        items,
    })
}

/// Serialize a document as 2-space indented JSON
///
/// `encrypted` defaults to `false` and `folders` to `[]` when absent.
///
/// # Errors
///
/// Returns an error only if an extra field holds a value serde_json refuses
/// to write, which cannot happen for documents produced by [`load`].
pub fn serialize(document: &Document) -> Result<Vec<u8>, serde_json::Error> {
    let view = ExportView {
        encrypted: document.encrypted.unwrap_or(false),
        folders: document.folders(),
        items: &document.items,
    };
    serde_json::to_vec_pretty(&view)
}

/// File name used when saving an export made on `date`
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("bitwarden_export_modified_{}.json", date.format("%Y-%m-%d"))
}

impl Document {
    /// Folder catalog, empty when the source had none
    #[must_use]
    pub fn folders(&self) -> &[Folder] {
        self.folders.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_item_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn find_folder(&self, id: &str) -> Option<&Folder> {
        self.folders().iter().find(|folder| folder.id == id)
    }

    /// Display name of a folder id; `"-"` for none, empty or dangling ids
    #[must_use]
    pub fn folder_name(&self, id: Option<&str>) -> &str {
        id.filter(|id| !id.is_empty())
            .and_then(|id| self.find_folder(id))
            .map_or(PLACEHOLDER, |folder| folder.name.as_str())
    }

    /// Look a folder up by id first, then by exact name
    #[must_use]
    pub fn resolve_folder(&self, id_or_name: &str) -> Option<&Folder> {
        self.find_folder(id_or_name).or_else(|| {
            self.folders()
                .iter()
                .find(|folder| folder.name == id_or_name)
        })
    }

    /// Ids of every item currently in the document
    #[must_use]
    pub fn item_ids(&self) -> HashSet<&str> {
        self.items.iter().map(Item::id).collect()
    }

    /// Remove every item matching `pred`, returning how many were removed
    pub fn remove_items<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&Item) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !pred(item));
        before - self.items.len()
    }
}
