//! User prompts
//!
//! The batch commands ask for missing arguments (a new name, a destination
//! folder, delete confirmation) through [`UserInput`]. The terminal editor
//! never prompts this way; it draws its own dialogs.

use std::io;

/// Blocking prompts for the batch commands
///
/// Every method returns `Ok(None)` when the user aborts the prompt with
/// Esc or `q`, so callers can tell "declined" apart from "gave up".
///
/// # Examples
///
/// ```no_run
/// use bwedit::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
///
/// if let Some(name) = input.prompt_text("New name", Some("Gmail"), false).unwrap() {
///     println!("Renaming to {name}");
/// }
///
/// let folders = vec!["No Folder".to_string(), "Email".to_string()];
/// if let Some(index) = input.prompt_select("Move 3 items to", &folders, Some(0)).unwrap() {
///     println!("Moving to {}", folders[index]);
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Ask for a line of text, pre-filled with `default`
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>>;

    /// Ask a yes/no question
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;

    /// Pick one of `items`, returning its index
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The prompt itself failed, usually because stdin is not a terminal
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Terminal prompts using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        let mut input = dialoguer::Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);

        if let Some(def) = default {
            input = input.with_initial_text(def);
        }

        // dialoguer has no abortable text prompt
        Ok(Some(input.interact_text()?))
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        Ok(dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?)
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        let mut select = dialoguer::Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items);

        if let Some(def) = default {
            select = select.default(def);
        }

        Ok(select.interact_opt()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_from_io() {
        let io_err = io::Error::other("test error");
        let input_err: InputError = io_err.into();
        assert!(matches!(input_err, InputError::Io(_)));
        assert_eq!(input_err.to_string(), "IO error: test error");
    }

    #[test]
    fn test_input_error_from_prompt() {
        let prompt_err = dialoguer::Error::IO(io::Error::other("not a terminal"));
        let input_err = InputError::from(prompt_err);
        assert!(input_err.to_string().starts_with("Prompt failed: "));
    }
}
