//! bwedit - an editor for Bitwarden JSON exports
//!
//! This library loads an unencrypted Bitwarden export, filters its items by
//! text, folder and type, tracks a selection across filter changes and
//! applies bulk deletes, bulk moves and single-item edits before writing a
//! dated copy of the export.
//!
//! The [`session::EditorSession`] owns all state; the terminal editor and
//! the batch commands are thin frontends over it.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod filter;
pub mod logging;
pub mod output;
pub mod selection;
pub mod session;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BwEditError {
    /// The export could not be loaded
    #[error(transparent)]
    Load(#[from] export::LoadError),
    /// A session operation failed
    #[error("{}", .0.user_message())]
    Session(#[from] session::SessionError),
    /// The terminal could not be driven
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// A prompt failed
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Writing JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing CSV output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
