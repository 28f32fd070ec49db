//! Storage locations for deepdrive.
//!
//! This module resolves the storage root once per process and derives
//! every other directory from it:
//! - Config directory (`~/.deepdrive`) and the files kept in it
//! - Storage root (env override, pointer file, or first-run negotiation)
//! - Derived subdirectories (recordings, logs, weights, ...)
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No terminal I/O: negotiation talks through `ports::DirectoryPrompter`
//! - Validation predicates are plain functions in `negotiate`

mod derived;
mod error;
mod negotiate;
mod platform;
mod pointer;
mod resolver;
mod storage_dir;

// Error type
pub use error::PathError;

// Platform locations
pub use platform::{
    CONFIG_DIR_NAME, PLATFORM_NAME, config_dir_in, default_root_in, expand_tilde, home_dir,
    os_string_from_bytes, strip_line_endings,
};

// Directory operations
pub use storage_dir::{MissingRoot, check_writable, create_storage_dir, prepare_chosen_root};

// Config directory files
pub use pointer::{
    INTERPRETER_FILE_NAME, POINTER_FILE_NAME, interpreter_file_path, pointer_file_path,
    read_pointer_file, record_runtime_interpreter_path, write_pointer_file,
};

// Negotiation state machine and predicates
pub use negotiate::{
    NegotiationState, classify_candidate, contains_name_token, evaluate_answer,
    existing_file_on_path, negotiate_root, prepare_candidate, with_name_token,
};

// Root resolution
pub use resolver::{RootResolution, RootSource, renegotiate_root, resolve_root_storage_directory};

// Derived directories
pub use derived::DerivedPaths;
