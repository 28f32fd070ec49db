//! CLI bootstrap - the composition root.
//!
//! The only place that reads the process environment, the home directory
//! and the executable path. Handlers receive the resulting values.

use std::env;
use std::path::PathBuf;

use deepdrive_core::{BootstrapEnv, DeepdriveContext, DirectoryPrompter, home_dir};
use tracing::debug;

use crate::error::CliError;

/// Bootstrap inputs gathered from the process.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Snapshot of the deepdrive environment variables.
    pub env: BootstrapEnv,
    /// Operator home directory.
    pub home: PathBuf,
    /// Path of the running binary, recorded for helper processes.
    pub executable: PathBuf,
}

impl CliConfig {
    /// Gather inputs from the current process.
    pub fn from_process() -> Result<Self, CliError> {
        let executable = env::current_exe()
            .map_err(|e| deepdrive_core::PathError::CurrentExe(e.to_string()))?;
        Ok(Self {
            env: BootstrapEnv::from_process_env(),
            home: home_dir()?,
            executable,
        })
    }
}

/// Run the core bootstrap with the given prompter.
pub fn bootstrap(
    config: &CliConfig,
    prompter: &mut dyn DirectoryPrompter,
) -> Result<DeepdriveContext, CliError> {
    debug!(home = %config.home.display(), "bootstrapping storage");
    let ctx = DeepdriveContext::bootstrap(&config.env, &config.home, &config.executable, prompter)?;
    Ok(ctx)
}
