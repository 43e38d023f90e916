//! Confirmation capability
//!
//! Destructive operations ask a [`Confirmer`] before touching the document.
//! The CLI answers through dialoguer, the TUI defers the question to a modal
//! dialog and replays the operation once the user has answered.

use crate::ui::input::{DialoguerInput, InputError, UserInput};
use std::cell::RefCell;

/// Something that can answer a yes/no question
pub trait Confirmer {
    /// Ask `prompt`; `Ok(false)` means the user declined
    ///
    /// # Errors
    ///
    /// Returns an `InputError` if the question could not be asked.
    fn confirm(&self, prompt: &str) -> Result<bool, InputError>;
}

/// Ask through a [`UserInput`], treating an aborted prompt as "no"
pub(crate) fn ask(input: &dyn UserInput, prompt: &str) -> Result<bool, InputError> {
    Ok(input.prompt_confirm(prompt, false)?.unwrap_or(false))
}

impl Confirmer for DialoguerInput {
    fn confirm(&self, prompt: &str) -> Result<bool, InputError> {
        ask(self, prompt)
    }
}

/// A confirmer with a fixed answer (`--yes`, or a dialog already answered)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preapproved(pub bool);

impl Confirmer for Preapproved {
    fn confirm(&self, _prompt: &str) -> Result<bool, InputError> {
        Ok(self.0)
    }
}

/// Records the question instead of answering it
///
/// Always declines, so the operation returns `Cancelled` without mutating;
/// the caller then shows [`DeferredConfirm::take_prompt`] in a dialog and
/// replays the operation with `Preapproved(true)` when accepted.
#[derive(Debug, Default)]
pub struct DeferredConfirm {
    prompt: RefCell<Option<String>>,
}

impl DeferredConfirm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The question asked since the last call, if any
    pub fn take_prompt(&self) -> Option<String> {
        self.prompt.borrow_mut().take()
    }
}

impl Confirmer for DeferredConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool, InputError> {
        *self.prompt.borrow_mut() = Some(prompt.to_string());
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::MockInput;

    #[test]
    fn test_preapproved() {
        assert!(Preapproved(true).confirm("Delete?").unwrap());
        assert!(!Preapproved(false).confirm("Delete?").unwrap());
    }

    #[test]
    fn test_deferred_records_prompt_and_declines() {
        let deferred = DeferredConfirm::new();
        assert!(!deferred.confirm("Delete 2 selected items?").unwrap());
        assert_eq!(
            deferred.take_prompt().as_deref(),
            Some("Delete 2 selected items?")
        );
        assert_eq!(deferred.take_prompt(), None);
    }

    #[test]
    fn test_aborted_prompt_counts_as_no() {
        let input = MockInput::new().with_confirms([None]);
        assert!(!input.confirm("Delete this item?").unwrap());
        assert_eq!(input.asked(), vec!["Delete this item?".to_string()]);
    }
}
