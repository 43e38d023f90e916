//! Output abstraction layer
//!
//! Operation outcomes are reported through an [`OutputWriter`], so the same
//! session code prints coloured lines in the batch commands and feeds the
//! transient status line in the terminal UI.

use colored::Colorize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use bwedit::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.success("Deleted 3 items");
/// output.info("No items selected");
/// output.error("Name cannot be empty");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    fn error(&self, message: &str);

    fn success(&self, message: &str);

    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Clear all messages (for TUI status bars)
    fn clear(&self);

    /// Write a message at `level`
    fn emit(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Normal => self.write(message),
            MessageLevel::Error => self.error(message),
            MessageLevel::Success => self.success(message),
            MessageLevel::Warning => self.warning(message),
            MessageLevel::Info => self.info(message),
        }
    }
}

/// CLI implementation - writes to stdout/stderr
///
/// With `quiet` set, only errors are written.
#[derive(Debug, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress everything but errors
    #[must_use]
    pub const fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "⚠".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }

    fn clear(&self) {}
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

type TimedMessage = (MessageLevel, String, Instant);

/// Buffered writer for the TUI status line
///
/// Messages expire after a TTL; the status line shows the newest live one.
///
/// # Examples
///
/// ```
/// use bwedit::ui::output::{MessageLevel, OutputWriter, StatusBarWriter};
/// use std::time::Duration;
///
/// let writer = StatusBarWriter::with_ttl(Duration::from_secs(3));
/// writer.success("Item updated");
///
/// assert_eq!(
///     writer.latest_message(),
///     Some((MessageLevel::Success, "Item updated".to_string()))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StatusBarWriter {
    messages: Arc<Mutex<Vec<TimedMessage>>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Keep at most this many messages around
    const CAPACITY: usize = 32;

    /// Create a status bar writer with the default 3 second TTL
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(3))
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, Vec<TimedMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_live(&self, created: Instant, now: Instant) -> bool {
        now.saturating_duration_since(created) < self.ttl
    }

    /// Messages that have not expired, oldest first
    #[must_use]
    pub fn recent_messages(&self) -> Vec<(MessageLevel, String)> {
        let now = Instant::now();
        self.lock()
            .iter()
            .filter(|(_, _, created)| self.is_live(*created, now))
            .map(|(level, msg, _)| (*level, msg.clone()))
            .collect()
    }

    /// The newest message that has not expired
    #[must_use]
    pub fn latest_message(&self) -> Option<(MessageLevel, String)> {
        self.latest_message_at(Instant::now())
    }

    /// The newest message still live at `now`
    #[must_use]
    pub fn latest_message_at(&self, now: Instant) -> Option<(MessageLevel, String)> {
        self.lock()
            .iter()
            .rev()
            .find(|(_, _, created)| self.is_live(*created, now))
            .map(|(level, msg, _)| (*level, msg.clone()))
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        let now = Instant::now();
        self.lock()
            .iter()
            .filter(|(_, _, created)| self.is_live(*created, now))
            .count()
    }

    /// Drop expired messages
    pub fn cleanup(&self) {
        let now = Instant::now();
        self.lock()
            .retain(|(_, _, created)| self.is_live(*created, now));
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        let mut messages = self.lock();
        messages.push((level, message.to_string(), Instant::now()));

        if messages.len() > Self::CAPACITY {
            let excess = messages.len() - Self::CAPACITY;
            messages.drain(..excess);
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }

    fn clear(&self) {
        self.lock().clear();
    }
}
