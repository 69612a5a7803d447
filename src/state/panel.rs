//! Panel data structures and logic

use std::ffi::OsStr;
use std::path::Path;

use super::navigator::{NavOutcome, Navigator, OpenOutcome};
use crate::fs::{Entry, FileOpener};

/// The file panel: a navigator plus what is needed to show it
#[derive(Debug)]
pub struct Panel {
    pub nav: Navigator,
    /// Entries of the current directory, in display order
    pub entries: Vec<Entry>,
    /// Index of the selected entry (meaningless when `entries` is empty)
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Rows available for the listing, updated during rendering
    pub visible_height: usize,
    /// Show hidden files (starting with .)
    pub show_hidden: bool,
    /// Error message if the directory couldn't be read
    pub error: Option<String>,
}

impl Panel {
    pub fn new(nav: Navigator, show_hidden: bool) -> Self {
        let mut panel = Self {
            nav,
            entries: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20, // Will be updated during first render
            show_hidden,
            error: None,
        };
        panel.refresh();
        panel
    }

    pub fn path(&self) -> &Path {
        self.nav.current()
    }

    /// Re-read the current directory from disk
    pub fn refresh(&mut self) {
        match self.nav.list_entries() {
            Ok(entries) => {
                self.entries = if self.show_hidden {
                    entries
                } else {
                    entries.into_iter().filter(|e| !e.is_hidden()).collect()
                };
                self.error = None;
                if self.cursor >= self.entries.len() {
                    self.cursor = self.entries.len().saturating_sub(1);
                }
            }
            Err(e) => {
                tracing::debug!(path = %self.path().display(), error = %e, "listing failed");
                self.error = Some(e.to_string());
                self.entries.clear();
                self.cursor = 0;
            }
        }
        self.adjust_scroll();
    }

    pub fn toggle_hidden(&mut self) {
        let current = self.selected().map(|e| e.file_name.clone());
        self.show_hidden = !self.show_hidden;
        self.refresh();
        if let Some(name) = current {
            self.select_file_name(&name);
        }
    }

    /// The selected entry, if the listing is not empty
    pub fn selected(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir()).count()
    }

    pub fn file_count(&self) -> usize {
        self.entries.len() - self.dir_count()
    }

    /// Put the cursor on the entry called `name`. Returns false if absent.
    pub fn select_name(&mut self, name: &str) -> bool {
        let index = self.entries.iter().position(|e| e.name == name);
        self.select_index(index)
    }

    /// Same as [`Panel::select_name`], matching the name as stored on disk
    pub fn select_file_name(&mut self, name: &OsStr) -> bool {
        let index = self.entries.iter().position(|e| e.file_name == name);
        self.select_index(index)
    }

    fn select_index(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(index) => {
                self.cursor = index;
                self.adjust_scroll();
                true
            }
            None => false,
        }
    }

    pub fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height.max(1);
        self.adjust_scroll();
    }

    /// Keep the cursor inside the visible window
    fn adjust_scroll(&mut self) {
        let height = self.visible_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        let max_offset = self.entries.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.adjust_scroll();
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
        self.adjust_scroll();
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height.max(1));
        self.adjust_scroll();
    }

    pub fn page_down(&mut self) {
        let last = self.entries.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height.max(1)).min(last);
        self.adjust_scroll();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    pub fn move_end(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Show a freshly entered directory from the top
    fn reset_view(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
        self.refresh();
    }

    pub fn change_directory(&mut self, target: &Path) -> NavOutcome {
        let outcome = self.nav.change_directory(target);
        if outcome.moved() {
            self.reset_view();
        }
        outcome
    }

    /// Go to the parent and put the cursor on the directory we came from
    pub fn go_parent(&mut self) -> NavOutcome {
        let left = self.path().file_name().map(OsStr::to_os_string);

        let outcome = self.nav.go_up();
        if outcome.moved() {
            self.reset_view();
            if let Some(name) = left {
                self.select_file_name(&name);
            }
        }
        outcome
    }

    pub fn go_home(&mut self) -> NavOutcome {
        let outcome = self.nav.go_home();
        if outcome.moved() {
            self.reset_view();
        }
        outcome
    }

    /// Open the selected entry: enter it if it is a directory, launch it otherwise
    pub fn open_selected(&mut self, opener: &dyn FileOpener) -> Option<OpenOutcome> {
        let entry = self.selected()?.clone();
        let outcome = self.nav.open_entry(&entry, opener);
        if outcome == OpenOutcome::Entered {
            self.reset_view();
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::opener::testing::RecordingOpener;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn fixture(show_hidden: bool) -> (TempDir, Panel) {
        let dir = tempdir().unwrap();
        for d in ["Docs", "music", ".cache"] {
            fs::create_dir(dir.path().join(d)).unwrap();
        }
        for f in ["a.txt", ".profile", "Zeta.md"] {
            fs::write(dir.path().join(f), b"").unwrap();
        }
        let nav = Navigator::new(dir.path(), Some(dir.path().to_path_buf())).unwrap();
        (dir, Panel::new(nav, show_hidden))
    }

    fn names(panel: &Panel) -> Vec<&str> {
        panel.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_listing_order_and_hidden_filter() {
        let (_dir, panel) = fixture(true);
        assert_eq!(names(&panel), vec![".cache", "Docs", "music", ".profile", "a.txt", "Zeta.md"]);
        assert_eq!(panel.dir_count(), 3);
        assert_eq!(panel.file_count(), 3);

        let (_dir, panel) = fixture(false);
        assert_eq!(names(&panel), vec!["Docs", "music", "a.txt", "Zeta.md"]);
    }

    #[test]
    fn test_toggle_hidden_keeps_selection() {
        let (_dir, mut panel) = fixture(false);
        assert!(panel.select_name("a.txt"));
        panel.toggle_hidden();
        assert!(panel.show_hidden);
        assert_eq!(panel.selected().unwrap().name, "a.txt");
    }

    #[test]
    fn test_single_selection_moves() {
        let (_dir, mut panel) = fixture(false);
        assert_eq!(panel.selected().unwrap().name, "Docs");
        panel.move_down();
        panel.move_down();
        assert_eq!(panel.selected().unwrap().name, "a.txt");
        panel.move_end();
        panel.move_down();
        assert_eq!(panel.selected().unwrap().name, "Zeta.md");
        panel.move_home();
        panel.move_up();
        assert_eq!(panel.cursor, 0);
    }

    #[test]
    fn test_go_parent_selects_previous_dir() {
        let (dir, mut panel) = fixture(true);
        assert!(panel.change_directory(&dir.path().join("music")).moved());
        assert!(panel.entries.is_empty());
        assert!(panel.selected().is_none());

        assert!(panel.go_parent().moved());
        assert_eq!(panel.path(), dir.path());
        assert_eq!(panel.selected().unwrap().name, "music");
    }

    #[cfg(unix)]
    #[test]
    fn test_go_parent_selects_non_utf8_dir() {
        use std::os::unix::ffi::OsStrExt;

        let (dir, mut panel) = fixture(true);
        let raw = OsStr::from_bytes(b"d\xe9j\xe0");
        fs::create_dir(dir.path().join(raw)).unwrap();
        assert!(panel.change_directory(&dir.path().join(raw)).moved());

        assert!(panel.go_parent().moved());
        assert_eq!(panel.selected().unwrap().file_name, raw);
    }

    #[test]
    fn test_open_selected_enters_directory() {
        let (dir, mut panel) = fixture(false);
        let opener = RecordingOpener::default();
        assert_eq!(panel.open_selected(&opener), Some(OpenOutcome::Entered));
        assert_eq!(panel.path(), dir.path().join("Docs"));
        assert_eq!(panel.cursor, 0);
    }

    #[test]
    fn test_open_on_empty_listing_is_none() {
        let (dir, mut panel) = fixture(false);
        panel.change_directory(&dir.path().join("Docs"));
        let opener = RecordingOpener::default();
        assert_eq!(panel.open_selected(&opener), None);
    }

    #[test]
    fn test_refresh_reports_vanished_directory() {
        let (dir, mut panel) = fixture(false);
        panel.change_directory(&dir.path().join("music"));
        fs::remove_dir(dir.path().join("music")).unwrap();
        panel.refresh();
        assert!(panel.error.is_some());
        assert!(panel.entries.is_empty());
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let (_dir, mut panel) = fixture(true);
        panel.set_visible_height(2);
        panel.move_end();
        assert_eq!(panel.cursor, 5);
        assert_eq!(panel.scroll_offset, 4);
        panel.page_up();
        assert_eq!(panel.cursor, 3);
        panel.move_home();
        assert_eq!(panel.scroll_offset, 0);
    }
}
