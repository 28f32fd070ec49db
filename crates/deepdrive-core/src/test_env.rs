//! Process-environment isolation for tests of [`crate::BootstrapEnv::from_process_env`].
//!
//! The variables these tests touch are the `DEEPDRIVE_*` family
//! (`DEEPDRIVE_DIR`, `DEEPDRIVE_RECORDING_DIR`, `DEEPDRIVE_SIM_START_COMMAND`,
//! `DEEPDRIVE_REUSE_OPEN_SIM`) and `FRAMES_PER_HDF5_FILE`. The process
//! environment is shared by every test thread, so hold [`DEEPDRIVE_ENV_LOCK`]
//! for as long as any [`ScopedEnvVar`] is alive.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::Mutex;

pub static DEEPDRIVE_ENV_LOCK: Mutex<()> = Mutex::new(());

/// One deepdrive variable overridden for the lifetime of the guard.
///
/// The previous value, raw OS string included, is put back on drop.
pub struct ScopedEnvVar {
    key: &'static str,
    previous: Option<OsString>,
}

impl ScopedEnvVar {
    pub fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        let previous = env::var_os(key);
        write_var(key, Some(value.as_ref()));
        Self { key, previous }
    }

    pub fn unset(key: &'static str) -> Self {
        let previous = env::var_os(key);
        write_var(key, None);
        Self { key, previous }
    }
}

impl Drop for ScopedEnvVar {
    fn drop(&mut self) {
        write_var(self.key, self.previous.as_deref());
    }
}

#[allow(unsafe_code)]
fn write_var(key: &str, value: Option<&OsStr>) {
    // SAFETY: callers hold DEEPDRIVE_ENV_LOCK, so no other test thread
    // reads or writes the environment concurrently.
    unsafe {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}
