//! Directory entry representation

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// Kind of a listed entry, derived from the filesystem at listing time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A single named object seen in one directory listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// File/directory name (not full path), lossily decoded for display
    pub name: String,
    /// Name exactly as the filesystem stores it
    pub file_name: OsString,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        Self { file_name: OsString::from(&name), name, kind }
    }

    fn from_os(file_name: &OsStr, kind: EntryKind) -> Self {
        Self {
            name: file_name.to_string_lossy().into_owned(),
            file_name: file_name.to_os_string(),
            kind,
        }
    }

    /// Stat `path` (following symlinks) and build an entry for it.
    ///
    /// Returns `None` for anything that is neither a directory nor a
    /// regular file: broken symlinks, sockets, fifos, devices.
    pub fn from_path(path: &Path) -> Option<Self> {
        let metadata = fs::metadata(path).ok()?;
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            return None;
        };

        let file_name = path.file_name().unwrap_or(path.as_os_str());
        Some(Self::from_os(file_name, kind))
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Dotfiles are hidden on every platform
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_path_kinds() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("Docs")).unwrap();
        fs::write(dir.path().join("a.txt"), b"hi").unwrap();

        let docs = Entry::from_path(&dir.path().join("Docs")).unwrap();
        assert_eq!(docs, Entry::new("Docs", EntryKind::Directory));
        assert!(docs.is_dir());

        let file = Entry::from_path(&dir.path().join("a.txt")).unwrap();
        assert_eq!(file.kind, EntryKind::File);
        assert!(!file.is_dir());
    }

    #[test]
    fn test_missing_path_is_skipped() {
        let dir = tempdir().unwrap();
        assert!(Entry::from_path(&dir.path().join("nope")).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_is_skipped() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();
        assert!(Entry::from_path(&link).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let raw = OsStr::from_bytes(b"caf\xe9.txt");
        fs::write(dir.path().join(raw), b"").unwrap();

        let entry = Entry::from_path(&dir.path().join(raw)).unwrap();
        assert_eq!(entry.file_name, raw);
        assert_eq!(entry.name, "caf\u{FFFD}.txt");
    }

    #[test]
    fn test_hidden() {
        assert!(Entry::new(".config", EntryKind::Directory).is_hidden());
        assert!(!Entry::new("config", EntryKind::Directory).is_hidden());
    }
}
