//! Creating deepdrive's directories on disk.
//!
//! Startup only ever creates. A directory that is already there is taken
//! as-is, whatever its permissions; only a failed creation is fatal.
//! Write access is checked solely when an operator picks a root through
//! `deepdrive config set`.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::PathError;

/// What `config set` does with a chosen root that is not on disk yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRoot {
    /// Create it along with any missing ancestors.
    #[default]
    Create,
    /// Leave the disk alone and fail.
    Refuse,
}

/// Create `path` and any missing ancestors. Present directories are left alone.
pub fn create_storage_dir(path: &Path) -> Result<(), PathError> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), "created directory");
    Ok(())
}

/// Vet a root the operator typed into `config set` before it is persisted.
///
/// Unlike startup, the root must also accept new files.
pub fn prepare_chosen_root(path: &Path, missing: MissingRoot) -> Result<(), PathError> {
    if !path.exists() && missing == MissingRoot::Refuse {
        return Err(PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: "directory does not exist and creation was not requested".to_string(),
        });
    }
    create_storage_dir(path)?;
    check_writable(path)
}

/// Create and drop a scratch file inside `path`.
///
/// The scratch file is removed when the handle drops, on success or error.
pub fn check_writable(path: &Path) -> Result<(), PathError> {
    tempfile::Builder::new()
        .prefix(".deepdrive-")
        .tempfile_in(path)
        .map(drop)
        .map_err(|e| PathError::NotWritable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn missing_ancestors_are_created() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b").join("Deepdrive");

        create_storage_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn second_creation_is_a_no_op() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("Deepdrive");

        create_storage_dir(&dir).unwrap();
        create_storage_dir(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(entries(&dir), 0);
    }

    #[test]
    fn regular_file_in_place_is_rejected() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, b"x").unwrap();

        let err = create_storage_dir(&file).unwrap_err();
        assert!(matches!(err, PathError::NotADirectory(p) if p == file));
    }

    #[cfg(unix)]
    #[test]
    fn existing_read_only_dir_is_accepted_at_startup() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let dir = temp.path().join("Deepdrive");
        fs::create_dir(&dir).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        let result = create_storage_dir(&dir);

        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
        result.unwrap();
        assert_eq!(entries(&dir), 0);
    }

    #[test]
    fn refuse_leaves_missing_root_absent() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("missing");

        let err = prepare_chosen_root(&dir, MissingRoot::Refuse).unwrap_err();
        assert!(matches!(err, PathError::CreateFailed { .. }));
        assert!(!dir.exists());
    }

    #[test]
    fn chosen_root_is_created_and_left_clean() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("chosen").join("Deepdrive");

        prepare_chosen_root(&dir, MissingRoot::Create).unwrap();
        assert!(dir.is_dir());
        assert_eq!(entries(&dir), 0);
    }
}
