//! Core traits for UI abstraction layer

use super::debounce::SEARCH_DEBOUNCE;
use super::error::Result;
use super::output::MessageLevel;
use crate::session::EditorSession;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for an interactive frontend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Directory exports are written to
    pub export_dir: PathBuf,
    /// Quiet period before a search edit is applied
    pub search_debounce: Duration,
    /// How long status messages stay visible
    pub message_ttl: Duration,
    /// Shown in the status line when the editor opens
    pub notice: Option<(MessageLevel, String)>,
}

impl FrontendConfig {
    #[must_use]
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
            search_debounce: SEARCH_DEBOUNCE,
            message_ttl: Duration::from_secs(3),
            notice: None,
        }
    }

    #[must_use]
    pub const fn with_search_debounce(mut self, delay: Duration) -> Self {
        self.search_debounce = delay;
        self
    }

    #[must_use]
    pub const fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_notice(mut self, level: MessageLevel, message: impl Into<String>) -> Self {
        self.notice = Some((level, message.into()));
        self
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// An interactive editor frontend
///
/// Implementations translate user gestures into [`EditorSession`]
/// operations and render the snapshots it produces. The session outlives
/// the frontend, so a caller can inspect it after `run` returns.
pub trait EditorFrontend {
    /// Run until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be driven. Session errors
    /// are reported inside the UI and never end the loop.
    fn run(&self, session: &mut EditorSession, config: &FrontendConfig) -> Result<()>;
}
