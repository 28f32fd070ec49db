//! Settings read from the process environment.
//!
//! The environment is read exactly once, into [`BootstrapEnv`]. Everything
//! downstream receives that value explicitly.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Storage root override. Bypasses the pointer file and negotiation.
pub const ENV_DEEPDRIVE_DIR: &str = "DEEPDRIVE_DIR";
/// Recordings directory override.
pub const ENV_RECORDING_DIR: &str = "DEEPDRIVE_RECORDING_DIR";
/// Command the simulator launcher runs instead of the installed binary.
pub const ENV_SIM_START_COMMAND: &str = "DEEPDRIVE_SIM_START_COMMAND";
/// Presence-only flag: attach to an already running simulator.
pub const ENV_REUSE_OPEN_SIM: &str = "DEEPDRIVE_REUSE_OPEN_SIM";
/// Frames written to each HDF5 recording file.
pub const ENV_FRAMES_PER_HDF5_FILE: &str = "FRAMES_PER_HDF5_FILE";

/// Default frames per HDF5 file.
pub const DEFAULT_FRAMES_PER_HDF5_FILE: u32 = 1000;
/// Recording stops after this many HDF5 files' worth of frames.
pub const MAX_RECORDED_FILES: u64 = 250;
/// Frames the trainer keeps queued.
pub const NUM_TRAIN_FRAMES_TO_QUEUE: u32 = 6000;

/// Errors that can occur while interpreting environment settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// A variable was set but could not be parsed.
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Snapshot of every environment variable the bootstrap looks at.
///
/// Values are kept as OS strings so paths outside UTF-8 survive untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapEnv {
    /// `DEEPDRIVE_DIR`, if set and non-empty.
    pub deepdrive_dir: Option<PathBuf>,
    /// `DEEPDRIVE_RECORDING_DIR`, if set and non-empty.
    pub recording_dir: Option<PathBuf>,
    /// `DEEPDRIVE_SIM_START_COMMAND`, passed through untouched.
    pub sim_start_command: Option<OsString>,
    /// Whether `DEEPDRIVE_REUSE_OPEN_SIM` is present at all.
    pub reuse_open_sim: bool,
    /// Raw `FRAMES_PER_HDF5_FILE`.
    pub frames_per_hdf5_file: Option<OsString>,
}

impl BootstrapEnv {
    /// Capture the current process environment.
    pub fn from_process_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            deepdrive_dir: non_empty(ENV_DEEPDRIVE_DIR).map(PathBuf::from),
            recording_dir: non_empty(ENV_RECORDING_DIR).map(PathBuf::from),
            sim_start_command: lookup(ENV_SIM_START_COMMAND),
            reuse_open_sim: lookup(ENV_REUSE_OPEN_SIM).is_some(),
            frames_per_hdf5_file: non_empty(ENV_FRAMES_PER_HDF5_FILE),
        }
    }

    /// `DEEPDRIVE_RECORDING_DIR` as a path.
    pub fn recording_dir_path(&self) -> Option<&Path> {
        self.recording_dir.as_deref()
    }
}

/// HDF5 recording and training queue sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordingSettings {
    /// Frames written to each HDF5 file.
    pub frames_per_hdf5_file: u32,
    /// Recording stops after this many observations.
    pub max_recorded_observations: u64,
    /// Frames the trainer keeps queued.
    pub num_train_frames_to_queue: u32,
    /// HDF5 files the trainer keeps queued.
    pub num_train_files_to_queue: u32,
}

impl RecordingSettings {
    /// Derive the queue sizes from a frames-per-file value.
    pub const fn with_frames_per_file(frames_per_hdf5_file: u32) -> Self {
        Self {
            frames_per_hdf5_file,
            max_recorded_observations: frames_per_hdf5_file as u64 * MAX_RECORDED_FILES,
            num_train_frames_to_queue: NUM_TRAIN_FRAMES_TO_QUEUE,
            num_train_files_to_queue: NUM_TRAIN_FRAMES_TO_QUEUE / frames_per_hdf5_file,
        }
    }

    /// Read `FRAMES_PER_HDF5_FILE`, falling back to the default.
    pub fn from_env(env: &BootstrapEnv) -> Result<Self, SettingsError> {
        let frames = match env.frames_per_hdf5_file.as_deref() {
            None => DEFAULT_FRAMES_PER_HDF5_FILE,
            Some(raw) => match raw.to_str().map(|v| v.trim().parse::<u32>()) {
                Some(Ok(n)) if n > 0 => n,
                _ => {
                    return Err(SettingsError::InvalidNumber {
                        key: ENV_FRAMES_PER_HDF5_FILE,
                        value: raw.to_string_lossy().into_owned(),
                    });
                }
            },
        };
        Ok(Self::with_frames_per_file(frames))
    }
}

impl Default for RecordingSettings {
    fn default() -> Self {
        Self::with_frames_per_file(DEFAULT_FRAMES_PER_HDF5_FILE)
    }
}

/// What the simulator launcher needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimSettings {
    /// Custom start command, e.g. an Unreal editor invocation.
    #[serde(serialize_with = "serialize_command")]
    pub start_command: Option<OsString>,
    /// Attach to a running simulator instead of starting one.
    pub reuse_open_sim: bool,
    /// Where the packaged simulator is installed.
    pub sim_path: PathBuf,
}

impl SimSettings {
    pub fn new(env: &BootstrapEnv, sim_path: PathBuf) -> Self {
        Self {
            start_command: env.sim_start_command.clone(),
            reuse_open_sim: env.reuse_open_sim,
            sim_path,
        }
    }
}

fn serialize_command<S: Serializer>(command: &Option<OsString>, s: S) -> Result<S::Ok, S::Error> {
    command
        .as_deref()
        .map(OsStr::to_string_lossy)
        .serialize(s)
}
