//! Storage root resolution.
//!
//! Resolution order:
//! 1. `DEEPDRIVE_DIR` override, used as given and never persisted
//! 2. Pointer file in the config directory
//! 3. Interactive negotiation, persisted to the pointer file
//!
//! Whatever the source, the root is created before it is returned.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use super::error::PathError;
use super::negotiate::{NegotiationState, classify_candidate, existing_file_on_path, negotiate_root};
use super::platform::strip_line_endings;
use super::pointer::{read_pointer_file, write_pointer_file};
use super::storage_dir::create_storage_dir;
use crate::ports::DirectoryPrompter;

/// How the storage root was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootSource {
    /// `DEEPDRIVE_DIR` was set.
    EnvOverride,
    /// Read back from the pointer file written on an earlier run.
    PointerFile,
    /// Chosen by the operator during this run.
    Negotiated,
}

impl fmt::Display for RootSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::EnvOverride => "env_override",
            Self::PointerFile => "pointer_file",
            Self::Negotiated => "negotiated",
        };
        f.write_str(label)
    }
}

/// Resolution result for the storage root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResolution {
    /// The resolved storage root. Exists as a directory.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: RootSource,
}

/// Resolve the storage root, prompting the operator only on first run.
///
/// `override_dir` is the value of `DEEPDRIVE_DIR`, if any. After this call
/// returns the root exists on disk; when the root was negotiated the
/// pointer file holds exactly that path.
pub fn resolve_root_storage_directory(
    override_dir: Option<&Path>,
    config_dir: &Path,
    home: &Path,
    prompter: &mut dyn DirectoryPrompter,
) -> Result<RootResolution, PathError> {
    let (path, source) = if let Some(dir) = override_dir {
        debug!(root = %dir.display(), "using DEEPDRIVE_DIR override");
        let dir = PathBuf::from(strip_line_endings(dir.as_os_str()));
        (dir, RootSource::EnvOverride)
    } else if let Some(cached) = usable_pointer(config_dir) {
        debug!(root = %cached.display(), "using persisted storage root");
        (cached, RootSource::PointerFile)
    } else {
        let negotiated = negotiate_and_persist(config_dir, home, prompter)?;
        (negotiated, RootSource::Negotiated)
    };

    create_storage_dir(&path)?;

    Ok(RootResolution { path, source })
}

/// Run negotiation unconditionally and overwrite the pointer file.
///
/// Backs `deepdrive config prompt`. The new root is created before returning.
pub fn renegotiate_root(
    config_dir: &Path,
    home: &Path,
    prompter: &mut dyn DirectoryPrompter,
) -> Result<PathBuf, PathError> {
    let root = negotiate_and_persist(config_dir, home, prompter)?;
    create_storage_dir(&root)?;
    Ok(root)
}

fn negotiate_and_persist(
    config_dir: &Path,
    home: &Path,
    prompter: &mut dyn DirectoryPrompter,
) -> Result<PathBuf, PathError> {
    let root = negotiate_root(home, prompter)?;
    let pointer = write_pointer_file(config_dir, &root)?;
    prompter.notify(&format!("{} written to {}", root.display(), pointer.display()));
    Ok(root)
}

/// Read the pointer file and check its value is still usable.
///
/// A pointer that cannot be read, or whose value is empty, relative, or
/// blocked by a file, is treated as corrupt and yields `None` so the
/// caller negotiates a fresh root. Writing that new root is still fatal
/// if the pointer location cannot be replaced.
fn usable_pointer(config_dir: &Path) -> Option<PathBuf> {
    let contents = match read_pointer_file(config_dir) {
        Ok(Some(contents)) => contents,
        Ok(None) => return None,
        Err(err) => {
            warn!(%err, "pointer file is unreadable, asking again");
            return None;
        }
    };

    let blank = contents
        .as_os_str()
        .as_encoded_bytes()
        .iter()
        .all(u8::is_ascii_whitespace);
    if blank {
        warn!(config_dir = %config_dir.display(), "pointer file is empty, asking again");
        return None;
    }

    match classify_candidate(contents, existing_file_on_path) {
        NegotiationState::Accepted(path) => Some(path),
        rejected => {
            warn!(?rejected, "pointer file holds an unusable storage root, asking again");
            None
        }
    }
}
