//! Editor session management
//!
//! An [`EditorSession`] owns the loaded document, the active filter query and
//! the selection. It is UI-agnostic: frontends forward discrete intents (a
//! click, a delete request, an edited name) and render the [`Snapshot`] it
//! produces afterwards.
//!
//! # Architecture
//!
//! ```text
//! Frontend intent
//!     ↓
//! EditorSession operation ──→ Confirmer (dialoguer / dialog / preapproved)
//!     ↓
//! Document + Selection updated, selection reconciled
//!     ↓
//! ActionOutcome ──→ OutputWriter (stdout / status bar)
//!     ↓
//! snapshot() ──→ rows, header state, stats
//! ```

pub mod confirm;
pub mod editor;
pub mod models;
pub mod sink;

pub use confirm::{Confirmer, DeferredConfirm, Preapproved};
pub use editor::EditorSession;
pub use models::{ActionOutcome, MoveTarget, Snapshot, Stats, VisibleRow};
pub use sink::{DirectorySink, ExportSink};

use crate::export::LoadError;
use crate::ui::input::InputError;

/// Session result type
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur during an editor session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No export loaded")]
    NotLoaded,

    #[error(transparent)]
    Load(#[from] LoadError),

    /// Input rejected before any mutation
    #[error("{0}")]
    Validation(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("No row at index {0}")]
    InvalidIndex(usize),

    #[error("Confirmation failed: {0}")]
    Confirm(#[from] InputError),

    #[error("Failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to save export: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Message shown to the user for this error
    ///
    /// Load failures get an `Error:` prefix; everything else is shown as-is.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Load(e) => format!("Error: {e}"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_message_is_prefixed() {
        let error = SessionError::from(LoadError::InvalidFormat("missing `items` array".into()));
        assert_eq!(
            error.user_message(),
            "Error: Invalid Bitwarden export format: missing `items` array"
        );
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let error = SessionError::Validation("Name cannot be empty".into());
        assert_eq!(error.user_message(), "Name cannot be empty");
        assert_eq!(SessionError::NotLoaded.to_string(), "No export loaded");
    }
}
