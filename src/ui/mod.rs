//! UI abstraction layer
//!
//! Backend-agnostic interfaces for user prompts, status output and the
//! interactive editor. Session code only talks to the traits, so the same
//! operations run behind the ratatui editor, the dialoguer-driven batch
//! commands and the scripted mocks used in tests.
//!
//! # Core Traits
//!
//! - **`EditorFrontend`** - Interactive editor driving an `EditorSession`
//! - **`UserInput`** - User prompts (text input, confirmation, selection)
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Session Layer                      │
//! │   (EditorSession, commands)             │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │  (EditorFrontend, UserInput, Output)    │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI Adapters  │  │ TUI Adapters      │
//! │ - Dialoguer   │  │ - RatatuiEditor   │
//! │ - Stdout      │  │ - StatusBarWriter │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Running the editor
//!
//! ```no_run
//! use bwedit::session::EditorSession;
//! use bwedit::ui::{EditorFrontend, FrontendConfig};
//! use bwedit::ui::ratatui_adapter::RatatuiEditor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = EditorSession::new();
//! session.load_file("bitwarden_export.json".as_ref())?;
//!
//! RatatuiEditor::new().run(&mut session, &FrontendConfig::new("."))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use bwedit::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Moved 2 items to Work");
//! output.info("No items selected");
//! ```

mod error;
mod traits;

pub mod debounce;
pub mod input;
pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use debounce::Debouncer;
pub use error::{Result, UiError};
pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{MessageLevel, OutputWriter, StatusBarWriter, StdoutWriter};
pub use ratatui_adapter::RatatuiEditor;
pub use traits::{EditorFrontend, FrontendConfig};
