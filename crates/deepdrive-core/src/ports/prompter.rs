//! Operator prompt port used by the first-run negotiation loop.
//!
//! Implementations live in adapters (the CLI reads stdin and writes
//! stdout). Tests use mocks or scripted answers.

use thiserror::Error;

/// Errors that can occur while asking the operator for input.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input reached end-of-file before an answer was given.
    #[error("input closed before an answer was given")]
    Closed,

    /// Reading or writing the interactive surface failed.
    #[error("prompt I/O failed: {0}")]
    Io(String),
}

/// Port for line-based operator interaction.
///
/// `ask` shows `question` and blocks until one line of input is available.
/// No timeout is imposed. Returned answers carry no trailing line ending.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryPrompter {
    /// Show a question and return the operator's answer.
    fn ask(&mut self, question: &str) -> Result<String, PromptError>;

    /// Show an informational message that needs no answer.
    fn notify(&mut self, message: &str);
}
