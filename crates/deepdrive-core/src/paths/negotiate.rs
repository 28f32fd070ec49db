//! First-run negotiation of the storage root.
//!
//! The loop is a small state machine:
//!
//! ```text
//! AwaitingInput --answer--> Accepted
//!       ^          |
//!       |          +------> InvalidNotAbsolute --retry--+
//!       |          +------> InvalidIsFile -------retry--+
//!       +-----------------------------------------------+
//! ```
//!
//! Candidate preparation and classification are plain functions so they
//! can be tested without a terminal. Only [`negotiate_root`] talks to the
//! operator, through a [`DirectoryPrompter`].

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::PathError;
use super::platform::{PLATFORM_NAME, default_root_in, expand_tilde};
use crate::ports::DirectoryPrompter;

/// One step of the negotiation loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationState {
    /// Waiting for the operator to answer `prompt`.
    AwaitingInput { prompt: String },
    /// The candidate is not an absolute path.
    InvalidNotAbsolute(PathBuf),
    /// The candidate cannot become a directory because `file` is a regular file.
    InvalidIsFile { candidate: PathBuf, file: PathBuf },
    /// The candidate passed every check.
    Accepted(PathBuf),
}

impl NegotiationState {
    /// Initial state: ask where to store files, offering `default_root`.
    pub fn start(default_root: &Path) -> Self {
        Self::AwaitingInput {
            prompt: initial_prompt(default_root),
        }
    }

    /// Move an invalid state back to `AwaitingInput` with an explanation.
    ///
    /// `AwaitingInput` and `Accepted` are returned unchanged.
    #[must_use]
    pub fn retry(self, default_root: &Path) -> Self {
        match self {
            Self::InvalidNotAbsolute(candidate) => Self::AwaitingInput {
                prompt: format!(
                    "Path: {} is not absolute, please specify a different path [Default - {}] ",
                    candidate.display(),
                    default_root.display()
                ),
            },
            Self::InvalidIsFile { file, .. } => Self::AwaitingInput {
                prompt: format!(
                    "Path: {} is already a file, please specify a different path [Default - {}] ",
                    file.display(),
                    default_root.display()
                ),
            },
            other => other,
        }
    }

    /// Whether the loop can stop.
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

fn initial_prompt(default_root: &Path) -> String {
    format!(
        "Where would you like to store {PLATFORM_NAME} files (i.e. sim binaries (1GB), \
         checkpoints (200MB), recordings, and logs)? [Default - {}] ",
        default_root.display()
    )
}

/// Case-insensitive check for the platform name anywhere in `path`.
pub fn contains_name_token(path: &Path) -> bool {
    path.to_string_lossy()
        .to_lowercase()
        .contains(&PLATFORM_NAME.to_lowercase())
}

/// Append a `Deepdrive` component unless the name token is already present.
pub fn with_name_token(candidate: PathBuf) -> PathBuf {
    if contains_name_token(&candidate) {
        candidate
    } else {
        candidate.join(PLATFORM_NAME)
    }
}

/// Turn a raw answer into a candidate path.
///
/// An empty answer becomes `default_root`, a leading `~` is expanded
/// against `home`, and the name token is appended when missing. Only line
/// endings are dropped; spaces belong to the path.
pub fn prepare_candidate(answer: &str, default_root: &Path, home: &Path) -> PathBuf {
    let answer = answer.trim_end_matches(['\r', '\n']);
    let raw = if answer.is_empty() {
        default_root.to_path_buf()
    } else {
        expand_tilde(answer, home)
    };
    with_name_token(raw)
}

/// Classify a prepared candidate.
///
/// `file_in_the_way` returns the regular file (the candidate itself or one
/// of its ancestors) that would stop the candidate from being a directory.
pub fn classify_candidate<F>(candidate: PathBuf, file_in_the_way: F) -> NegotiationState
where
    F: FnOnce(&Path) -> Option<PathBuf>,
{
    if !candidate.is_absolute() {
        return NegotiationState::InvalidNotAbsolute(candidate);
    }
    match file_in_the_way(&candidate) {
        Some(file) => NegotiationState::InvalidIsFile { candidate, file },
        None => NegotiationState::Accepted(candidate),
    }
}

/// Filesystem check used by the real loop: the first of `path` and its
/// ancestors that exists as a regular file.
pub fn existing_file_on_path(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .find(|ancestor| ancestor.is_file())
        .map(Path::to_path_buf)
}

/// Prepare and classify an answer against the real filesystem.
pub fn evaluate_answer(answer: &str, default_root: &Path, home: &Path) -> NegotiationState {
    classify_candidate(
        prepare_candidate(answer, default_root, home),
        existing_file_on_path,
    )
}

/// Run the interactive loop until the operator gives an acceptable root.
///
/// Nothing is persisted here; the caller writes the pointer file.
pub fn negotiate_root(
    home: &Path,
    prompter: &mut dyn DirectoryPrompter,
) -> Result<PathBuf, PathError> {
    let default_root = default_root_in(home);
    let mut state = NegotiationState::start(&default_root);

    loop {
        state = match state {
            NegotiationState::AwaitingInput { prompt } => {
                let answer = prompter
                    .ask(&prompt)
                    .map_err(|e| PathError::Prompt(e.to_string()))?;
                evaluate_answer(&answer, &default_root, home)
            }
            NegotiationState::Accepted(root) => {
                debug!(root = %root.display(), "storage root accepted");
                return Ok(root);
            }
            invalid => {
                debug!(?invalid, "rejected storage root candidate");
                invalid.retry(&default_root)
            }
        };
    }
}
