//! Directory navigator
//!
//! Owns the current directory and performs every navigation and mutation
//! relative to it. The current directory always names an existing
//! directory: navigation to anything else is refused with
//! [`NavOutcome::Unchanged`] and leaves state as it was.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::errors::{NavError, NavResult};
use crate::fs::{ops, Entry, FileOpener};

/// Result of a navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// The current directory changed
    Moved,
    /// Target missing, not a directory, or already at the root
    Unchanged,
}

impl NavOutcome {
    pub fn moved(self) -> bool {
        self == NavOutcome::Moved
    }
}

/// Result of opening an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Entry was a directory and is now the current directory
    Entered,
    /// Entry was a directory that could not be entered
    Stayed,
    /// Entry was a file and was handed to the opener
    Launched,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: PathBuf,
    home: Option<PathBuf>,
}

impl Navigator {
    /// Start at `start`, which must be an existing directory. Relative paths
    /// resolve against the process working directory.
    pub fn new(start: &Path, home: Option<PathBuf>) -> NavResult<Self> {
        let base = std::env::current_dir()?;
        let current = normalize(&base.join(start));
        if !current.is_dir() {
            return Err(NavError::NotADirectory(current));
        }
        Ok(Self { current, home })
    }

    /// Absolute, normalized path of the current directory
    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// List the current directory: directories first, then files
    pub fn list_entries(&self) -> io::Result<Vec<Entry>> {
        ops::list_entries(&self.current)
    }

    /// Move to `target` if it is an existing directory.
    ///
    /// Relative targets resolve against the current directory. `.` and `..`
    /// components are folded lexically, so the stored path is absolute and
    /// free of them.
    pub fn change_directory(&mut self, target: &Path) -> NavOutcome {
        let resolved = normalize(&self.current.join(target));
        if !resolved.is_dir() {
            tracing::debug!(target = %resolved.display(), "not a directory, staying put");
            return NavOutcome::Unchanged;
        }
        tracing::debug!(from = %self.current.display(), to = %resolved.display(), "change directory");
        self.current = resolved;
        NavOutcome::Moved
    }

    /// Move to the parent directory; a no-op at the filesystem root
    pub fn go_up(&mut self) -> NavOutcome {
        let Some(parent) = self.current.parent() else {
            return NavOutcome::Unchanged;
        };
        if parent == self.current {
            return NavOutcome::Unchanged;
        }
        let parent = parent.to_path_buf();
        self.change_directory(&parent)
    }

    pub fn go_home(&mut self) -> NavOutcome {
        match self.home.clone() {
            Some(home) => self.change_directory(&home),
            None => NavOutcome::Unchanged,
        }
    }

    /// Full path for `name` inside the current directory
    pub fn entry_path(&self, name: impl AsRef<OsStr>) -> NavResult<PathBuf> {
        let name = name.as_ref();
        ops::validate_name(name)?;
        Ok(self.current.join(name))
    }

    pub fn create_directory(&self, name: &str) -> NavResult<PathBuf> {
        let path = self.entry_path(name)?;
        fs::create_dir(&path)?;
        tracing::debug!(path = %path.display(), "created directory");
        Ok(path)
    }

    /// Create an empty file. Never truncates an existing one.
    pub fn create_file(&self, name: &str) -> NavResult<PathBuf> {
        let path = self.entry_path(name)?;
        ops::create_file_exclusive(&path)?;
        tracing::debug!(path = %path.display(), "created file");
        Ok(path)
    }

    /// Delete a file. Directories are always refused.
    pub fn delete_file(&self, name: impl AsRef<OsStr>) -> NavResult<()> {
        let path = self.entry_path(name)?;
        ops::delete_file_only(&path)?;
        tracing::debug!(path = %path.display(), "deleted file");
        Ok(())
    }

    /// Rename a file or directory. Fails if `new_name` is taken.
    pub fn rename(&self, old_name: impl AsRef<OsStr>, new_name: impl AsRef<OsStr>) -> NavResult<PathBuf> {
        let from = self.entry_path(old_name)?;
        let to = self.entry_path(new_name)?;
        ops::rename_no_clobber(&from, &to)?;
        tracing::debug!(from = %from.display(), to = %to.display(), "renamed");
        Ok(to)
    }

    /// Enter a directory entry or hand a file entry to `opener`.
    ///
    /// Launcher failures are logged and otherwise ignored.
    pub fn open_entry(&mut self, entry: &Entry, opener: &dyn FileOpener) -> OpenOutcome {
        let Ok(path) = self.entry_path(&entry.file_name) else {
            return OpenOutcome::Stayed;
        };

        if entry.is_dir() {
            return match self.change_directory(&path) {
                NavOutcome::Moved => OpenOutcome::Entered,
                NavOutcome::Unchanged => OpenOutcome::Stayed,
            };
        }

        if let Err(e) = opener.open(&path) {
            tracing::warn!(path = %path.display(), opener = opener.name(), error = %e, "launcher failed");
        }
        OpenOutcome::Launched
    }
}

/// Fold `.` and `..` out of an absolute path without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                out.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() refuses to go above the root
                out.pop();
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::opener::testing::RecordingOpener;
    use crate::fs::entry::EntryKind;
    use tempfile::{tempdir, TempDir};

    /// Home directory holding `Docs/` and `a.txt`
    fn home_fixture() -> (TempDir, Navigator) {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("Docs")).unwrap();
        fs::write(dir.path().join("a.txt"), b"hello").unwrap();
        let nav = Navigator::new(dir.path(), Some(dir.path().to_path_buf())).unwrap();
        (dir, nav)
    }

    fn names(nav: &Navigator) -> Vec<String> {
        nav.list_entries().unwrap().into_iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_home_scenario() {
        let (dir, mut nav) = home_fixture();
        assert_eq!(names(&nav), vec!["Docs", "a.txt"]);

        assert_eq!(nav.change_directory(&dir.path().join("Docs")), NavOutcome::Moved);
        assert_eq!(nav.current(), dir.path().join("Docs"));

        assert_eq!(nav.go_up(), NavOutcome::Moved);
        assert_eq!(nav.current(), dir.path());
    }

    #[test]
    fn test_listing_only_shows_target_contents() {
        let (dir, mut nav) = home_fixture();
        fs::write(dir.path().join("Docs").join("inner.md"), b"").unwrap();
        nav.change_directory(&dir.path().join("Docs"));
        assert_eq!(names(&nav), vec!["inner.md"]);
    }

    #[test]
    fn test_change_to_missing_dir_is_noop() {
        let (dir, mut nav) = home_fixture();
        let before = nav.current().to_path_buf();
        assert_eq!(nav.change_directory(&dir.path().join("nope")), NavOutcome::Unchanged);
        assert_eq!(nav.current(), before);
    }

    #[test]
    fn test_change_to_file_is_noop() {
        let (dir, mut nav) = home_fixture();
        assert_eq!(nav.change_directory(&dir.path().join("a.txt")), NavOutcome::Unchanged);
        assert_eq!(nav.current(), dir.path());
    }

    #[test]
    fn test_change_directory_normalizes() {
        let (dir, mut nav) = home_fixture();
        let messy = dir.path().join("Docs").join("..").join("Docs").join(".");
        assert!(nav.change_directory(&messy).moved());
        assert_eq!(nav.current(), dir.path().join("Docs"));
    }

    #[test]
    fn test_relative_target_resolves_against_current() {
        let (dir, mut nav) = home_fixture();
        assert!(nav.change_directory(Path::new("Docs")).moved());
        assert_eq!(nav.current(), dir.path().join("Docs"));
        assert!(nav.change_directory(Path::new("..")).moved());
        assert_eq!(nav.current(), dir.path());
    }

    #[test]
    fn test_go_up_at_root_is_fixed_point() {
        let dir = tempdir().unwrap();
        let root = dir.path().ancestors().last().unwrap().to_path_buf();
        let mut nav = Navigator::new(&root, None).unwrap();
        assert_eq!(nav.go_up(), NavOutcome::Unchanged);
        assert_eq!(nav.go_up(), NavOutcome::Unchanged);
        assert_eq!(nav.current(), root);
    }

    #[test]
    fn test_go_home() {
        let (dir, mut nav) = home_fixture();
        nav.change_directory(Path::new("Docs"));
        assert_eq!(nav.go_home(), NavOutcome::Moved);
        assert_eq!(nav.current(), dir.path());

        let mut homeless = Navigator::new(dir.path(), None).unwrap();
        assert_eq!(homeless.go_home(), NavOutcome::Unchanged);
    }

    #[test]
    fn test_new_rejects_files() {
        let (dir, _nav) = home_fixture();
        let err = Navigator::new(&dir.path().join("a.txt"), None).unwrap_err();
        assert!(matches!(err, NavError::NotADirectory(_)));
    }

    #[test]
    fn test_create_file_twice_fails_and_preserves() {
        let (dir, nav) = home_fixture();
        let path = nav.create_file("x").unwrap();
        fs::write(&path, b"first").unwrap();
        let modified = fs::metadata(&path).unwrap().modified().unwrap();

        let err = nav.create_file("x").unwrap_err();
        assert!(err.is_collision());
        assert_eq!(fs::read(dir.path().join("x")).unwrap(), b"first");
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
    }

    #[test]
    fn test_create_directory() {
        let (dir, nav) = home_fixture();
        nav.create_directory("Music").unwrap();
        assert!(dir.path().join("Music").is_dir());
        assert!(nav.create_directory("Music").unwrap_err().is_collision());
        assert!(matches!(nav.create_directory(""), Err(NavError::InvalidName(_))));
    }

    #[test]
    fn test_names_cannot_escape_current_dir() {
        let (dir, mut nav) = home_fixture();
        nav.change_directory(Path::new("Docs"));
        assert!(matches!(nav.create_file("../evil"), Err(NavError::InvalidName(_))));
        assert!(!dir.path().join("evil").exists());
    }

    #[test]
    fn test_delete_file_rejects_directories() {
        let (dir, nav) = home_fixture();
        assert!(matches!(nav.delete_file("Docs"), Err(NavError::IsDirectory(_))));
        assert!(dir.path().join("Docs").is_dir());

        nav.delete_file("a.txt").unwrap();
        assert_eq!(names(&nav), vec!["Docs"]);
    }

    #[test]
    fn test_rename_scenario() {
        let (_dir, nav) = home_fixture();
        nav.rename("a.txt", "b.txt").unwrap();
        let listed = names(&nav);
        assert!(listed.contains(&"b.txt".to_string()));
        assert!(!listed.contains(&"a.txt".to_string()));
    }

    #[test]
    fn test_rename_collision_fails() {
        let (dir, nav) = home_fixture();
        fs::write(dir.path().join("b.txt"), b"other").unwrap();
        assert!(nav.rename("a.txt", "b.txt").unwrap_err().is_collision());
        assert_eq!(fs::read(dir.path().join("b.txt")).unwrap(), b"other");
        assert!(nav.rename("a.txt", "Docs").unwrap_err().is_collision());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_entry_can_be_renamed_and_deleted() {
        use std::os::unix::ffi::OsStrExt;

        let (dir, mut nav) = home_fixture();
        let raw = OsStr::from_bytes(b"caf\xe9.txt");
        fs::write(dir.path().join(raw), b"").unwrap();

        let listed = nav.list_entries().unwrap();
        let entry = listed.iter().find(|e| e.file_name == raw).unwrap().clone();

        let opener = RecordingOpener::default();
        assert_eq!(nav.open_entry(&entry, &opener), OpenOutcome::Launched);
        assert_eq!(*opener.opened.borrow(), vec![dir.path().join(raw)]);

        let renamed = OsStr::from_bytes(b"caf\xe9-2.txt");
        nav.rename(&entry.file_name, renamed).unwrap();
        assert!(!dir.path().join(raw).exists());
        assert!(dir.path().join(renamed).is_file());

        nav.delete_file(renamed).unwrap();
        assert!(!dir.path().join(renamed).exists());
        assert_eq!(names(&nav), vec!["Docs", "a.txt"]);
    }

    #[test]
    fn test_open_entry_directory_enters() {
        let (dir, mut nav) = home_fixture();
        let opener = RecordingOpener::default();
        let docs = Entry::new("Docs", EntryKind::Directory);
        assert_eq!(nav.open_entry(&docs, &opener), OpenOutcome::Entered);
        assert_eq!(nav.current(), dir.path().join("Docs"));
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_open_entry_vanished_directory_stays() {
        let (dir, mut nav) = home_fixture();
        let opener = RecordingOpener::default();
        let ghost = Entry::new("Ghost", EntryKind::Directory);
        assert_eq!(nav.open_entry(&ghost, &opener), OpenOutcome::Stayed);
        assert_eq!(nav.current(), dir.path());
    }

    #[test]
    fn test_open_entry_file_launches_absolute_path() {
        let (dir, mut nav) = home_fixture();
        let opener = RecordingOpener::default();
        let file = Entry::new("a.txt", EntryKind::File);
        assert_eq!(nav.open_entry(&file, &opener), OpenOutcome::Launched);
        assert_eq!(*opener.opened.borrow(), vec![dir.path().join("a.txt")]);
        assert_eq!(nav.current(), dir.path());
    }

    #[test]
    fn test_normalize() {
        let root = std::env::temp_dir();
        let root = root.ancestors().last().unwrap();
        let path = root.join("a").join(".").join("b").join("..").join("c");
        assert_eq!(normalize(&path), root.join("a").join("c"));
        assert_eq!(normalize(&root.join("..")), root.to_path_buf());
    }
}
