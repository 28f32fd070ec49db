//! Platform locations and small path normalizers.
//!
//! Everything that depends on the operator's machine (home directory,
//! config directory, default storage root) is computed here so the rest
//! of the module can take plain `Path` arguments.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Name token that every storage root must carry somewhere in its path.
pub const PLATFORM_NAME: &str = "Deepdrive";

/// Name of the per-machine configuration directory under the home directory.
pub const CONFIG_DIR_NAME: &str = ".deepdrive";

/// Get the operator's home directory.
pub fn home_dir() -> Result<PathBuf, PathError> {
    dirs::home_dir().ok_or(PathError::NoHomeDir)
}

/// Configuration directory for a given home: `<home>/.deepdrive`.
pub fn config_dir_in(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR_NAME)
}

/// Default storage root offered to the operator: `<home>/Deepdrive`.
pub fn default_root_in(home: &Path) -> PathBuf {
    home.join(PLATFORM_NAME)
}

/// Remove every carriage-return and newline from `raw`, leaving every other
/// unit of the native encoding untouched.
///
/// Pointer files written on one platform and read on another can carry
/// stray line endings, including in the middle of the value.
#[cfg(unix)]
pub fn strip_line_endings(raw: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let kept = raw.as_bytes().iter().copied().filter(|b| !matches!(b, b'\r' | b'\n'));
    OsString::from_vec(kept.collect())
}

#[cfg(windows)]
pub fn strip_line_endings(raw: &OsStr) -> OsString {
    use std::os::windows::ffi::{OsStrExt, OsStringExt};

    let kept: Vec<u16> = raw
        .encode_wide()
        .filter(|unit| !matches!(*unit, 0x0d | 0x0a))
        .collect();
    OsString::from_wide(&kept)
}

#[cfg(not(any(unix, windows)))]
pub fn strip_line_endings(raw: &OsStr) -> OsString {
    OsString::from(raw.to_string_lossy().replace(['\r', '\n'], ""))
}

/// Rebuild an OS string from bytes read off disk.
///
/// Unix accepts any byte sequence. Elsewhere the bytes must be UTF-8.
#[cfg(unix)]
pub fn os_string_from_bytes(bytes: Vec<u8>) -> Result<OsString, String> {
    use std::os::unix::ffi::OsStringExt;

    Ok(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
pub fn os_string_from_bytes(bytes: Vec<u8>) -> Result<OsString, String> {
    String::from_utf8(bytes)
        .map(OsString::from)
        .map_err(|e| e.to_string())
}

/// Expand a leading `~` against `home`. Other input is returned unchanged.
pub fn expand_tilde(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        home.to_path_buf()
    } else if let Some(rest) = raw.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_line_endings_removes_embedded_and_trailing() {
        let strip = |raw: &str| strip_line_endings(OsStr::new(raw));
        assert_eq!(strip("/data/dd\r\n"), "/data/dd");
        assert_eq!(strip("/da\nta/\rdd"), "/data/dd");
        assert_eq!(strip("/plain"), "/plain");
        assert_eq!(strip(" /spaced dir \n"), " /spaced dir ");
    }

    #[cfg(unix)]
    #[test]
    fn strip_line_endings_keeps_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/home/h\xFFome/Deepdrive\r\n");
        let stripped = strip_line_endings(raw);
        assert_eq!(stripped.as_bytes(), b"/home/h\xFFome/Deepdrive");
    }

    #[cfg(unix)]
    #[test]
    fn os_string_from_bytes_is_lossless_on_unix() {
        use std::os::unix::ffi::OsStrExt;

        let rebuilt = os_string_from_bytes(vec![0xff, 0xfe, b'x']).unwrap();
        assert_eq!(rebuilt.as_bytes(), &[0xff, 0xfe, b'x']);
    }

    #[test]
    fn default_root_is_home_plus_platform_name() {
        let home = Path::new("/home/op");
        assert_eq!(default_root_in(home), PathBuf::from("/home/op/Deepdrive"));
        assert_eq!(config_dir_in(home), PathBuf::from("/home/op/.deepdrive"));
    }

    #[test]
    fn expand_tilde_only_touches_leading_tilde() {
        let home = Path::new("/home/op");
        assert_eq!(expand_tilde("~", home), PathBuf::from("/home/op"));
        assert_eq!(expand_tilde("~/dd", home), PathBuf::from("/home/op/dd"));
        assert_eq!(expand_tilde("/srv/~dd", home), PathBuf::from("/srv/~dd"));
        assert_eq!(expand_tilde("~other", home), PathBuf::from("~other"));
    }
}
