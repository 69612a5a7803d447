//! Filesystem operations

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use super::entry::Entry;
use crate::errors::{NavError, NavResult};

/// Read directory contents and return them in display order.
///
/// Directories come first, then files; each group is sorted by name
/// case-insensitively. Entries that are neither a directory nor a regular
/// file are left out. An unreadable directory propagates the OS error.
pub fn list_entries(path: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if let Some(listed) = Entry::from_path(&entry.path()) {
            entries.push(listed);
        }
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Sort entries in place: directories before files, case-insensitive by name.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    // Directories first
    if a.is_dir() != b.is_dir() {
        return if a.is_dir() { Ordering::Less } else { Ordering::Greater };
    }
    // Raw name breaks ties between names that only differ in case
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.file_name.cmp(&b.file_name))
}

/// Reject names that are empty or would address something outside the
/// directory they are joined onto.
pub fn validate_name(name: impl AsRef<OsStr>) -> NavResult<()> {
    let name = name.as_ref();
    // Separators and NUL are ASCII, so a byte scan is exact on every platform
    let bytes = name.as_encoded_bytes();
    let invalid = bytes.is_empty()
        || bytes == b"."
        || bytes == b".."
        || bytes.iter().any(|&b| b == 0 || std::path::is_separator(char::from(b)));
    if invalid {
        return Err(NavError::InvalidName(name.to_string_lossy().into_owned()));
    }
    Ok(())
}

/// Create an empty file; fails if anything already exists at `path`.
pub fn create_file_exclusive(path: &Path) -> io::Result<()> {
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    Ok(())
}

/// Remove a file. Anything that resolves to a directory is refused.
pub fn delete_file_only(path: &Path) -> NavResult<()> {
    let metadata = fs::metadata(path)?;
    if metadata.is_dir() {
        return Err(NavError::IsDirectory(file_label(path)));
    }
    fs::remove_file(path)?;
    Ok(())
}

/// Rename `from` to `to`, refusing to replace an existing destination.
///
/// `std::fs::rename` silently overwrites on Unix and fails on Windows; this
/// fails everywhere. A destination that is the same file as the source is
/// allowed so that case-only renames work on case-insensitive filesystems.
pub fn rename_no_clobber(from: &Path, to: &Path) -> NavResult<()> {
    if fs::symlink_metadata(to).is_ok() && !same_file(from, to) {
        return Err(NavError::AlreadyExists(file_label(to)));
    }
    fs::rename(from, to)?;
    Ok(())
}

#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(x), Ok(y)) => x.dev() == y.dev() && x.ino() == y.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(x), Ok(y)) => {
            x.to_string_lossy().to_lowercase() == y.to_string_lossy().to_lowercase()
        }
        _ => false,
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::entry::EntryKind;
    use tempfile::tempdir;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_dirs_first_case_insensitive() {
        let dir = tempdir().unwrap();
        for d in ["beta", "Alpha", "gamma"] {
            fs::create_dir(dir.path().join(d)).unwrap();
        }
        for f in ["b.txt", "A.txt", "c.TXT"] {
            fs::write(dir.path().join(f), b"").unwrap();
        }

        let entries = list_entries(dir.path()).unwrap();
        assert_eq!(
            names(&entries),
            vec!["Alpha", "beta", "gamma", "A.txt", "b.txt", "c.TXT"]
        );
        assert!(entries[..3].iter().all(Entry::is_dir));
        assert!(entries[3..].iter().all(|e| e.kind == EntryKind::File));
    }

    #[test]
    fn test_sort_ties_are_deterministic() {
        let mut entries = vec![
            Entry::new("readme", EntryKind::File),
            Entry::new("README", EntryKind::File),
            Entry::new("src", EntryKind::Directory),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["src", "README", "readme"]);
    }

    #[test]
    fn test_unreadable_dir_propagates() {
        let dir = tempdir().unwrap();
        let err = list_entries(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("notes.txt").is_ok());
        assert!(validate_name(".bashrc").is_ok());
        for bad in ["", ".", "..", "a/b", "../escape"] {
            assert!(
                matches!(validate_name(bad), Err(NavError::InvalidName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_name_accepts_non_utf8() {
        use std::os::unix::ffi::OsStrExt;

        assert!(validate_name(OsStr::from_bytes(b"caf\xe9.txt")).is_ok());
        assert!(validate_name(OsStr::from_bytes(b"a\xe9/b")).is_err());
    }

    #[test]
    fn test_create_file_exclusive_keeps_original() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x");
        create_file_exclusive(&path).unwrap();
        fs::write(&path, b"keep me").unwrap();

        let err = create_file_exclusive(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&path).unwrap(), b"keep me");
    }

    #[test]
    fn test_delete_file_only_refuses_directories() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("empty");
        fs::create_dir(&sub).unwrap();

        assert!(matches!(delete_file_only(&sub), Err(NavError::IsDirectory(_))));
        assert!(sub.is_dir());

        let file = dir.path().join("gone.txt");
        fs::write(&file, b"").unwrap();
        delete_file_only(&file).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn test_rename_refuses_to_clobber() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, b"a").unwrap();
        fs::write(&b, b"b").unwrap();

        let err = rename_no_clobber(&a, &b).unwrap_err();
        assert!(err.is_collision());
        assert_eq!(fs::read(&b).unwrap(), b"b");
        assert!(a.exists());
    }

    #[test]
    fn test_rename_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("old")).unwrap();
        rename_no_clobber(&dir.path().join("old"), &dir.path().join("new")).unwrap();
        assert!(dir.path().join("new").is_dir());
        assert!(!dir.path().join("old").exists());
    }
}
