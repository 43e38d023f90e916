//! Scripted input and recording output for tests

use super::input::{Result, UserInput};
use super::output::{MessageLevel, OutputWriter};
use crate::session::confirm::{Confirmer, ask};
use crate::ui::input::InputError;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// User input that replays predetermined answers
///
/// Every prompt is recorded and can be inspected with [`MockInput::asked`].
/// Running out of scripted answers is reported as an aborted prompt.
#[derive(Debug, Default)]
pub struct MockInput {
    confirms: Mutex<VecDeque<Option<bool>>>,
    texts: Mutex<VecDeque<Option<String>>>,
    selects: Mutex<VecDeque<Option<usize>>>,
    asked: Mutex<Vec<String>>,
    fail: bool,
}

impl MockInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Input whose prompts all fail with an IO error
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_confirms(self, answers: impl IntoIterator<Item = Option<bool>>) -> Self {
        lock(&self.confirms).extend(answers);
        self
    }

    #[must_use]
    pub fn with_texts<S: Into<String>>(
        self,
        answers: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        lock(&self.texts).extend(answers.into_iter().map(|a| a.map(Into::into)));
        self
    }

    #[must_use]
    pub fn with_selects(self, answers: impl IntoIterator<Item = Option<usize>>) -> Self {
        lock(&self.selects).extend(answers);
        self
    }

    /// Prompts shown so far, in order
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        lock(&self.asked).clone()
    }

    fn record(&self, prompt: &str) -> Result<()> {
        lock(&self.asked).push(prompt.to_string());
        if self.fail {
            return Err(InputError::Io(std::io::Error::other("terminal unavailable")));
        }
        Ok(())
    }
}

impl UserInput for MockInput {
    fn prompt_text(
        &self,
        prompt: &str,
        _default: Option<&str>,
        _allow_empty: bool,
    ) -> Result<Option<String>> {
        self.record(prompt)?;
        Ok(lock(&self.texts).pop_front().flatten())
    }

    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<Option<bool>> {
        self.record(prompt)?;
        Ok(lock(&self.confirms).pop_front().flatten())
    }

    fn prompt_select(
        &self,
        prompt: &str,
        _items: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        self.record(prompt)?;
        Ok(lock(&self.selects).pop_front().flatten())
    }
}

impl Confirmer for MockInput {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        ask(self, prompt)
    }
}

/// Output writer that keeps every message with its level
#[derive(Debug, Default)]
pub struct RecordingWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl RecordingWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        lock(&self.messages).clone()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        lock(&self.messages).push((level, message.to_string()));
    }
}

impl OutputWriter for RecordingWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }

    fn clear(&self) {
        lock(&self.messages).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_input_replays_answers() {
        let input = MockInput::new()
            .with_confirms([Some(true), Some(false)])
            .with_texts([Some("GitHub")])
            .with_selects([Some(2)]);

        assert_eq!(input.prompt_confirm("first", false).unwrap(), Some(true));
        assert_eq!(input.prompt_confirm("second", false).unwrap(), Some(false));
        assert_eq!(input.prompt_confirm("third", false).unwrap(), None);
        assert_eq!(
            input.prompt_text("Name", None, false).unwrap().as_deref(),
            Some("GitHub")
        );
        assert_eq!(input.prompt_select("Folder", &[], None).unwrap(), Some(2));
        assert_eq!(input.asked().len(), 5);
    }

    #[test]
    fn test_failing_input() {
        let input = MockInput::failing();
        assert!(input.confirm("Delete?").is_err());
        assert_eq!(input.asked(), vec!["Delete?".to_string()]);
    }

    #[test]
    fn test_recording_writer() {
        let writer = RecordingWriter::new();
        writer.error("boom");
        writer.warning("careful");
        assert_eq!(
            writer.messages(),
            vec![
                (MessageLevel::Error, "boom".to_string()),
                (MessageLevel::Warning, "careful".to_string()),
            ]
        );
        writer.clear();
        assert!(writer.messages().is_empty());
    }
}
