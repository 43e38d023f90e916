//! Ratatui-based editor frontend
//!
//! This module provides an implementation of the `EditorFrontend` trait
//! using ratatui for drawing and crossterm for terminal events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiEditor                     │
//! │  (implements EditorFrontend trait)          │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  Session   │ │  Ratatui  │ │ Crossterm │
//! │ (intents)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Features
//!
//! - **Item table** with checkbox column and tri-state header
//! - **Mouse support**: click toggles, shift-click selects a range
//! - **Debounced search** across name, username and URLs
//! - **In-TUI dialogs** for confirmation, editing and folder choice
//! - **Status bar** for messages
//! - **Help overlay** (F1 / ?)

mod editor;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use editor::RatatuiEditor;
pub use events::{EventResult, Intent};
pub use state::{AppState, Focus, Mode, PendingAction};
pub use theme::Theme;
