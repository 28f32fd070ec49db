//! Process-wide bootstrap.
//!
//! [`DeepdriveContext::bootstrap`] runs once at startup, before any other
//! subsystem touches the filesystem, and returns an immutable value that
//! callers pass to whatever needs a path.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::constants::DIR_DATE_FORMAT;
use crate::paths::{
    DerivedPaths, PathError, RootResolution, config_dir_in, create_storage_dir,
    record_runtime_interpreter_path, resolve_root_storage_directory,
};
use crate::ports::DirectoryPrompter;
use crate::settings::{BootstrapEnv, RecordingSettings, SettingsError, SimSettings};
use crate::weights::WeightsLayout;

/// Errors that stop the bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Everything the bootstrap resolved, fixed for the life of the process.
#[derive(Debug, Clone, Serialize)]
pub struct DeepdriveContext {
    /// `<home>/.deepdrive`
    pub config_dir: PathBuf,
    /// The storage root and how it was found.
    pub root: RootResolution,
    /// Subdirectories of the storage root.
    pub dirs: DerivedPaths,
    /// Weights bundles under `dirs.weights`.
    pub weights: WeightsLayout,
    pub sim: SimSettings,
    pub recording: RecordingSettings,
    /// Run timestamp formatted with [`DIR_DATE_FORMAT`], for per-run directories.
    pub date_str: String,
}

impl DeepdriveContext {
    /// Resolve storage, record the running executable and create every
    /// derived directory.
    ///
    /// `home` is the operator's home directory and `executable` the running
    /// binary; both are passed in so tests can point them at a temp dir.
    pub fn bootstrap(
        env: &BootstrapEnv,
        home: &Path,
        executable: &Path,
        prompter: &mut dyn DirectoryPrompter,
    ) -> Result<Self, BootstrapError> {
        Self::bootstrap_at(env, home, executable, prompter, Local::now())
    }

    /// [`DeepdriveContext::bootstrap`] with an explicit start time.
    pub fn bootstrap_at(
        env: &BootstrapEnv,
        home: &Path,
        executable: &Path,
        prompter: &mut dyn DirectoryPrompter,
        started_at: DateTime<Local>,
    ) -> Result<Self, BootstrapError> {
        let recording = RecordingSettings::from_env(env)?;

        let config_dir = config_dir_in(home);
        create_storage_dir(&config_dir)?;

        let root = resolve_root_storage_directory(
            env.deepdrive_dir.as_deref(),
            &config_dir,
            home,
            prompter,
        )?;
        record_runtime_interpreter_path(&config_dir, executable)?;

        let dirs = DerivedPaths::under(&root.path, env.recording_dir_path());
        dirs.create_all()?;

        info!(
            root = %root.path.display(),
            source = %root.source,
            "storage ready"
        );

        Ok(Self {
            weights: WeightsLayout::under(&dirs.weights),
            sim: SimSettings::new(env, dirs.sim.clone()),
            config_dir,
            root,
            dirs,
            recording,
            date_str: started_at.format(DIR_DATE_FORMAT).to_string(),
        })
    }

    /// The storage root.
    pub fn root_dir(&self) -> &Path {
        &self.root.path
    }
}

impl fmt::Display for DeepdriveContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "config_dir = {}", self.config_dir.display())?;
        writeln!(f, "deepdrive_dir = {}", self.root.path.display())?;
        writeln!(f, "deepdrive_dir_source = {}", self.root.source)?;
        writeln!(f, "recording_dir = {}", self.dirs.recordings.display())?;
        writeln!(f, "gym_dir = {}", self.dirs.gym.display())?;
        writeln!(f, "log_dir = {}", self.dirs.log.display())?;
        writeln!(f, "results_dir = {}", self.dirs.results.display())?;
        writeln!(f, "tensorflow_out_dir = {}", self.dirs.tensorflow.display())?;
        writeln!(f, "weights_dir = {}", self.dirs.weights.display())?;
        writeln!(f, "baselines_dir = {}", self.dirs.baselines_results.display())?;
        writeln!(f, "sim_path = {}", self.sim.sim_path.display())?;
        writeln!(f, "reuse_open_sim = {}", self.sim.reuse_open_sim)?;
        writeln!(
            f,
            "frames_per_hdf5_file = {}",
            self.recording.frames_per_hdf5_file
        )?;
        write!(f, "date_str = {}", self.date_str)
    }
}
