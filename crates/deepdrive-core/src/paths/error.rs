//! Path-related error types.
//!
//! Every variant here is fatal for startup: invalid operator input is
//! handled inside the negotiation loop and never reaches this type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the operator's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// A directory is not writable.
    #[error("Directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    /// Failed to read or write the storage pointer file.
    #[error("Failed to access pointer file {path}: {reason}")]
    PointerFile { path: PathBuf, reason: String },

    /// Failed to write the interpreter-path file.
    #[error("Failed to write interpreter file {path}: {reason}")]
    InterpreterFile { path: PathBuf, reason: String },

    /// The running executable could not be located.
    #[error("Cannot determine current executable: {0}")]
    CurrentExe(String),

    /// Reading the operator's answer failed (closed stdin, broken terminal).
    #[error("Failed to read storage location from operator: {0}")]
    Prompt(String),
}
