//! Paths that keep the native form for I/O and a forward-slash form for output

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// A filesystem path paired with its display form.
///
/// I/O always goes through the untouched native path, so filenames with
/// backslashes or non-UTF-8 bytes on Unix are read and written exactly as
/// enumerated. The display form is lossy UTF-8 and uses forward slashes;
/// separators are only rewritten on Windows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    native: PathBuf,
    display: String,
}

impl NormalizedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let native = path.into();
        let display = display_form(&native);
        Self { native, display }
    }

    /// Display form, for console and report output only.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The exact path to use for I/O.
    pub fn to_native(&self) -> &Path {
        &self.native
    }
}

#[cfg(windows)]
fn display_form(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(not(windows))]
fn display_form(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_backslash_is_kept_in_native_path() {
        let path = NormalizedPath::new("src/a\\b.tsx");
        assert_eq!(path.to_native(), Path::new("src/a\\b.tsx"));
        assert_eq!(path.as_str(), "src/a\\b.tsx");
        assert_ne!(path, NormalizedPath::new("src/a/b.tsx"));
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_separators_display_as_forward_slashes() {
        let path = NormalizedPath::new("src\\components\\Card.tsx");
        assert_eq!(path.as_str(), "src/components/Card.tsx");
        assert_eq!(path.to_native(), Path::new("src\\components\\Card.tsx"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_lossy_only_for_display() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"src/caf\xe9.tsx");
        let path = NormalizedPath::new(raw);
        assert_eq!(path.to_native().as_os_str(), raw);
        assert_eq!(path.as_str(), "src/caf\u{FFFD}.tsx");
    }

    #[test]
    fn test_display_matches_as_str() {
        let path = NormalizedPath::new("src/index.tsx");
        assert_eq!(path.to_string(), "src/index.tsx");
    }
}
