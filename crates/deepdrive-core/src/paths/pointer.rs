//! Files persisted inside the config directory.
//!
//! - `deepdrive_dir`: the storage root chosen on first run, read on every
//!   later startup.
//! - `python_bin`: the path of the running executable, rewritten on every
//!   startup so helper processes can find the same runtime.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::PathError;
use super::platform::{os_string_from_bytes, strip_line_endings};

/// File name of the storage pointer inside the config directory.
pub const POINTER_FILE_NAME: &str = "deepdrive_dir";

/// File name of the interpreter-path record inside the config directory.
pub const INTERPRETER_FILE_NAME: &str = "python_bin";

/// Location of the storage pointer file.
pub fn pointer_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(POINTER_FILE_NAME)
}

/// Location of the interpreter-path file.
pub fn interpreter_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(INTERPRETER_FILE_NAME)
}

/// Read the persisted storage root, with line endings stripped.
///
/// Returns `Ok(None)` when the pointer file has never been written. The
/// bytes are taken as-is, so a root outside UTF-8 reads back unchanged.
pub fn read_pointer_file(config_dir: &Path) -> Result<Option<PathBuf>, PathError> {
    let path = pointer_file_path(config_dir);
    if !path.exists() {
        return Ok(None);
    }

    let unreadable = |reason: String| PathError::PointerFile {
        path: path.clone(),
        reason,
    };
    let bytes = fs::read(&path).map_err(|e| unreadable(e.to_string()))?;
    let raw = os_string_from_bytes(bytes).map_err(unreadable)?;
    debug!(pointer = %path.display(), "read storage pointer");
    Ok(Some(PathBuf::from(strip_line_endings(&raw))))
}

/// Persist the storage root verbatim, replacing any previous value.
///
/// Returns the pointer file location so callers can report it.
pub fn write_pointer_file(config_dir: &Path, root: &Path) -> Result<PathBuf, PathError> {
    let path = pointer_file_path(config_dir);
    overwrite(&path, root).map_err(|reason| PathError::PointerFile {
        path: path.clone(),
        reason,
    })?;
    info!(root = %root.display(), pointer = %path.display(), "persisted storage root");
    Ok(path)
}

/// Record the path of the running executable, overwriting the previous record.
pub fn record_runtime_interpreter_path(config_dir: &Path, executable: &Path) -> Result<(), PathError> {
    let path = interpreter_file_path(config_dir);
    overwrite(&path, executable).map_err(|reason| PathError::InterpreterFile {
        path: path.clone(),
        reason,
    })?;
    debug!(executable = %executable.display(), "recorded runtime executable");
    Ok(())
}

fn overwrite(path: &Path, value: &Path) -> Result<(), String> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| e.to_string())?;
    file.write_all(value.as_os_str().as_encoded_bytes())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_pointer_reads_as_none() {
        let temp = tempdir().unwrap();
        assert_eq!(read_pointer_file(temp.path()).unwrap(), None);
    }

    #[test]
    fn pointer_is_written_verbatim_without_newline() {
        let temp = tempdir().unwrap();
        let written = write_pointer_file(temp.path(), Path::new("/data/Deepdrive")).unwrap();

        assert_eq!(written, temp.path().join("deepdrive_dir"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "/data/Deepdrive");
    }

    #[test]
    fn pointer_read_strips_crlf() {
        let temp = tempdir().unwrap();
        fs::write(pointer_file_path(temp.path()), "/data/Deepdrive\r\n").unwrap();

        assert_eq!(
            read_pointer_file(temp.path()).unwrap(),
            Some(PathBuf::from("/data/Deepdrive"))
        );
    }

    #[test]
    fn pointer_that_is_a_directory_is_an_error() {
        let temp = tempdir().unwrap();
        fs::create_dir(pointer_file_path(temp.path())).unwrap();

        let err = read_pointer_file(temp.path()).unwrap_err();
        assert!(matches!(err, PathError::PointerFile { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_root_is_persisted_byte_for_byte() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        let root = Path::new(OsStr::from_bytes(b"/srv/h\xFFome/Deepdrive"));

        let written = write_pointer_file(temp.path(), root).unwrap();
        assert_eq!(fs::read(&written).unwrap(), b"/srv/h\xFFome/Deepdrive");
        assert_eq!(read_pointer_file(temp.path()).unwrap().as_deref(), Some(root));
    }

    #[test]
    fn interpreter_record_is_overwritten_not_appended() {
        let temp = tempdir().unwrap();
        record_runtime_interpreter_path(temp.path(), Path::new("/usr/bin/first-long-name")).unwrap();
        record_runtime_interpreter_path(temp.path(), Path::new("/usr/bin/dd")).unwrap();

        let contents = fs::read_to_string(interpreter_file_path(temp.path())).unwrap();
        assert_eq!(contents, "/usr/bin/dd");
    }

    #[test]
    fn interpreter_record_fails_when_config_dir_missing() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");

        let err = record_runtime_interpreter_path(&missing, Path::new("/usr/bin/dd")).unwrap_err();
        assert!(matches!(err, PathError::InterpreterFile { .. }));
    }
}
