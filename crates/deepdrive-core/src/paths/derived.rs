//! Subdirectories derived from the storage root.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::storage_dir::create_storage_dir;
use super::error::PathError;

/// Directories every other subsystem writes into.
///
/// Each one is a plain join under the storage root, except `recordings`,
/// which `DEEPDRIVE_RECORDING_DIR` may move elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedPaths {
    /// HDF5 recordings.
    pub recordings: PathBuf,
    /// Gym environment artifacts.
    pub gym: PathBuf,
    /// Log files.
    pub log: PathBuf,
    /// Evaluation results.
    pub results: PathBuf,
    /// TensorFlow summaries and checkpoints.
    pub tensorflow: PathBuf,
    /// Downloaded and trained weights.
    pub weights: PathBuf,
    /// Output of the baselines PPO runs.
    pub baselines_results: PathBuf,
    /// Simulator install location. Not created here; the sim installer owns it.
    pub sim: PathBuf,
}

impl DerivedPaths {
    /// Compute every derived path without touching the filesystem.
    pub fn under(root: &Path, recording_override: Option<&Path>) -> Self {
        Self {
            recordings: recording_override.map_or_else(|| root.join("recordings"), Path::to_path_buf),
            gym: root.join("gym"),
            log: root.join("log"),
            results: root.join("results"),
            tensorflow: root.join("tensorflow"),
            weights: root.join("weights"),
            baselines_results: root.join("baselines_results"),
            sim: root.join("sim"),
        }
    }

    /// The directories that [`DerivedPaths::create_all`] creates.
    pub fn created_dirs(&self) -> [&Path; 7] {
        [
            &self.recordings,
            &self.gym,
            &self.log,
            &self.results,
            &self.tensorflow,
            &self.weights,
            &self.baselines_results,
        ]
    }

    /// Create every derived directory. Already-present directories are fine.
    pub fn create_all(&self) -> Result<(), PathError> {
        for dir in self.created_dirs() {
            create_storage_dir(dir)?;
        }
        Ok(())
    }
}
