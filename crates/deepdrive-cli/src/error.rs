//! CLI-specific error types and mappings.
//!
//! Maps core bootstrap failures to exit codes and user-facing messages.

use deepdrive_core::{BootstrapError, PathError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or operator input that cannot be used.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (permission denied, disk full, closed terminal).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 74: I/O error
    /// - 78: Configuration error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::NoHomeDir | PathError::CurrentExe(_) => Self::Config(err.to_string()),
            PathError::NotADirectory(_)
            | PathError::CreateFailed { .. }
            | PathError::NotWritable { .. }
            | PathError::PointerFile { .. }
            | PathError::InterpreterFile { .. }
            | PathError::Prompt(_) => Self::Io(err.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<BootstrapError> for CliError {
    fn from(err: BootstrapError) -> Self {
        match err {
            BootstrapError::Path(path_err) => path_err.into(),
            BootstrapError::Settings(settings_err) => settings_err.into(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn storage_failures_are_io_errors() {
        let err: CliError = PathError::CreateFailed {
            path: PathBuf::from("/ro/Deepdrive"),
            reason: "Permission denied".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 74);
        assert!(err.to_string().contains("/ro/Deepdrive"));
    }

    #[test]
    fn bad_settings_are_config_errors() {
        let err: CliError = BootstrapError::Settings(SettingsError::InvalidNumber {
            key: "FRAMES_PER_HDF5_FILE",
            value: "x".to_string(),
        })
        .into();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn missing_home_is_config_error() {
        let err: CliError = PathError::NoHomeDir.into();
        assert_eq!(err.exit_code(), 78);
    }
}
