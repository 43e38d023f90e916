//! UI error types

use thiserror::Error;

/// Errors that can occur while driving the terminal
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event polling failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_error_message() {
        let err = UiError::from(std::io::Error::other("no tty"));
        assert_eq!(err.to_string(), "Terminal error: no tty");
    }
}
