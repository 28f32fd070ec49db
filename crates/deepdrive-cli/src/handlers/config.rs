//! Config command handler.
//!
//! Shows or changes the persisted storage root without running the full
//! bootstrap.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use deepdrive_core::paths::{config_dir_in, default_root_in};
use deepdrive_core::{
    MissingRoot, NegotiationState, create_storage_dir, evaluate_answer, pointer_file_path,
    prepare_chosen_root, read_pointer_file, renegotiate_root, write_pointer_file,
};
use tracing::warn;

use crate::bootstrap::CliConfig;
use crate::config_commands::ConfigCommand;
use crate::error::CliError;
use crate::utils::input::TerminalPrompter;

/// Execute the config command.
pub fn execute<R: BufRead, W: Write>(
    config: &CliConfig,
    command: ConfigCommand,
    prompter: &mut TerminalPrompter<R, W>,
) -> Result<()> {
    let config_dir = config_dir_in(&config.home);
    create_storage_dir(&config_dir).map_err(CliError::from)?;
    warn_if_overridden(config);

    match command {
        ConfigCommand::Show => {
            let pointer = pointer_file_path(&config_dir);
            println!("Config directory: {}", config_dir.display());
            match read_pointer_file(&config_dir) {
                Ok(Some(root)) => println!(
                    "Storage root: {} (from {})",
                    root.display(),
                    pointer.display()
                ),
                Ok(None) => println!("Storage root: not set (you will be asked on first run)"),
                Err(err) => println!("Storage root: unreadable, you will be asked again ({err})"),
            }
            if let Some(dir) = &config.env.deepdrive_dir {
                println!("DEEPDRIVE_DIR override: {}", dir.display());
            }
            Ok(())
        }
        ConfigCommand::Prompt => {
            if let Ok(Some(current)) = read_pointer_file(&config_dir) {
                let replace = prompter
                    .prompt_confirmation(&format!(
                        "Storage root is currently {}. Replace it?",
                        current.display()
                    ))
                    .map_err(|e| CliError::Io(e.to_string()))?;
                if !replace {
                    println!("Storage root unchanged.");
                    return Ok(());
                }
            }
            let root =
                renegotiate_root(&config_dir, &config.home, prompter).map_err(CliError::from)?;
            println!("✓ Storage root updated to {} (interactive)", root.display());
            Ok(())
        }
        ConfigCommand::Set { path, no_create } => {
            let root = set_root(config, &path, no_create)?;
            println!("✓ Storage root updated to {} (non-interactive)", root.display());
            Ok(())
        }
    }
}

/// Validate `raw` with the same rules as the interactive loop, then persist it.
pub fn set_root(config: &CliConfig, raw: &str, no_create: bool) -> Result<PathBuf, CliError> {
    let default_root = default_root_in(&config.home);
    let root = match evaluate_answer(raw, &default_root, &config.home) {
        NegotiationState::Accepted(root) => root,
        NegotiationState::InvalidNotAbsolute(candidate) => {
            return Err(CliError::Arguments(format!(
                "{} is not an absolute path",
                candidate.display()
            )));
        }
        NegotiationState::InvalidIsFile { file, .. } => {
            return Err(CliError::Arguments(format!(
                "{} is already a file",
                file.display()
            )));
        }
        NegotiationState::AwaitingInput { .. } => {
            return Err(CliError::Arguments(format!("cannot use {raw} as storage root")));
        }
    };

    let missing = if no_create {
        MissingRoot::Refuse
    } else {
        MissingRoot::Create
    };
    prepare_chosen_root(&root, missing)?;
    write_pointer_file(&config_dir_in(&config.home), &root)?;
    Ok(root)
}

fn warn_if_overridden(config: &CliConfig) {
    if let Some(dir) = &config.env.deepdrive_dir {
        warn!(
            override_dir = %dir.display(),
            "DEEPDRIVE_DIR is set; it takes precedence over the persisted storage root"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepdrive_core::BootstrapEnv;
    use std::fs;
    use tempfile::tempdir;

    fn config_in(temp: &std::path::Path) -> CliConfig {
        let home = temp.join("home");
        fs::create_dir_all(home.join(".deepdrive")).unwrap();
        CliConfig {
            env: BootstrapEnv::default(),
            home,
            executable: PathBuf::from("/usr/bin/deepdrive"),
        }
    }

    #[test]
    fn set_root_persists_with_name_token() {
        let temp = tempdir().unwrap();
        let config = config_in(temp.path());
        let target = temp.path().join("storage");

        let root = set_root(&config, target.to_str().unwrap(), false).unwrap();

        assert_eq!(root, target.join("Deepdrive"));
        assert!(root.is_dir());
        assert_eq!(
            fs::read_to_string(config.home.join(".deepdrive/deepdrive_dir")).unwrap(),
            root.to_string_lossy()
        );
    }

    #[test]
    fn set_root_rejects_relative() {
        let temp = tempdir().unwrap();
        let config = config_in(temp.path());

        let err = set_root(&config, "relative/dir", false).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(!config.home.join(".deepdrive/deepdrive_dir").exists());
    }

    #[test]
    fn set_root_rejects_file() {
        let temp = tempdir().unwrap();
        let config = config_in(temp.path());
        let file = temp.path().join("existingfile");
        fs::write(&file, b"x").unwrap();

        let err = set_root(&config, file.to_str().unwrap(), false).unwrap_err();
        assert!(err.to_string().contains("is already a file"));
    }

    #[test]
    fn set_root_no_create_requires_existing_dir() {
        let temp = tempdir().unwrap();
        let config = config_in(temp.path());
        let missing = temp.path().join("missing-deepdrive");

        assert!(set_root(&config, missing.to_str().unwrap(), true).is_err());
        fs::create_dir_all(&missing).unwrap();
        assert_eq!(
            set_root(&config, missing.to_str().unwrap(), true).unwrap(),
            missing
        );
    }

    #[test]
    fn prompt_keeps_root_when_declined() {
        let temp = tempdir().unwrap();
        let config = config_in(temp.path());
        let pointer = config.home.join(".deepdrive/deepdrive_dir");
        fs::write(&pointer, "/data/Deepdrive").unwrap();

        let mut prompter =
            TerminalPrompter::new(std::io::Cursor::new(b"n\n".to_vec()), Vec::<u8>::new());
        execute(&config, ConfigCommand::Prompt, &mut prompter).unwrap();

        assert_eq!(fs::read_to_string(&pointer).unwrap(), "/data/Deepdrive");
    }

    #[test]
    fn prompt_replaces_unreadable_pointer_without_confirmation() {
        let temp = tempdir().unwrap();
        let config = config_in(temp.path());
        let pointer = config.home.join(".deepdrive/deepdrive_dir");
        fs::create_dir(&pointer).unwrap();

        let mut prompter =
            TerminalPrompter::new(std::io::Cursor::new(b"\n".to_vec()), Vec::<u8>::new());
        let err = execute(&config, ConfigCommand::Prompt, &mut prompter).unwrap_err();

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.starts_with("Where would you like to store Deepdrive files"));
        assert_eq!(err.downcast_ref::<CliError>().map(CliError::exit_code), Some(74));
    }

    #[test]
    fn set_root_leaves_no_scratch_files_behind() {
        let temp = tempdir().unwrap();
        let config = config_in(temp.path());
        let target = temp.path().join("fresh-Deepdrive");

        let root = set_root(&config, target.to_str().unwrap(), false).unwrap();
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }
}
