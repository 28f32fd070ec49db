//! Core of deepdrive's process bootstrap.
//!
//! Resolves where the platform keeps its files (asking the operator on the
//! first run on a machine), derives the working directories under that
//! root, and holds the constant tables shared by the simulator client,
//! agents and trainers.
#![deny(unused_crate_dependencies)]

pub mod constants;
pub mod context;
pub mod paths;
pub mod ports;
pub mod rng;
pub mod settings;
pub mod weights;

#[cfg(test)]
pub(crate) mod test_env;

// Re-export commonly used types for convenience
pub use context::{BootstrapError, DeepdriveContext};
pub use ports::{DirectoryPrompter, PromptError};
pub use rng::{RNG_SEED, seeded_rng};
pub use settings::{BootstrapEnv, RecordingSettings, SettingsError, SimSettings};
pub use weights::{WeightsAsset, WeightsLayout};

// Re-export path utilities
pub use paths::{
    DerivedPaths, MissingRoot, NegotiationState, PLATFORM_NAME, PathError, RootResolution,
    RootSource, config_dir_in, create_storage_dir, default_root_in, evaluate_answer, home_dir,
    prepare_chosen_root, pointer_file_path, read_pointer_file, record_runtime_interpreter_path,
    renegotiate_root, resolve_root_storage_directory, write_pointer_file,
};
