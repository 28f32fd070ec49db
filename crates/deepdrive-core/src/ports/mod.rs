//! Port definitions (trait abstractions) for external systems.
//!
//! The core never touches the terminal. Adapters implement these traits
//! and inject them into the bootstrap.

pub mod prompter;

pub use prompter::{DirectoryPrompter, PromptError};

#[cfg(test)]
pub use prompter::MockDirectoryPrompter;
