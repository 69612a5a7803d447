//! Application state and the actions behind every key

use std::ffi::OsStr;
use std::path::PathBuf;

use super::mode::{Mode, PromptKind};
use super::navigator::{NavOutcome, Navigator, OpenOutcome};
use super::panel::Panel;
use crate::config::Config;
use crate::errors::NavError;
use crate::fs::FileOpener;
use crate::ui::Theme;
use crate::utils::{drive_root, expand_tilde, get_available_drives};

/// One line of feedback in the status bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    pub panel: Panel,
    pub mode: Mode,
    pub config: Config,
    /// File the config was loaded from (for saving the last path)
    pub config_path: Option<PathBuf>,
    pub theme: Theme,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
    /// Rows of the help screen body, updated during rendering
    pub help_height: usize,
    opener: Box<dyn FileOpener>,
}

impl App {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        nav: Navigator,
        opener: Box<dyn FileOpener>,
    ) -> Self {
        let theme = config.theme.build_theme();
        let panel = Panel::new(nav, config.general.show_hidden);
        Self {
            panel,
            mode: Mode::Normal,
            config,
            config_path,
            theme,
            status: None,
            should_quit: false,
            help_height: 20,
            opener,
        }
    }

    pub fn key_matches(&self, action: &str, key: &crossterm::event::KeyEvent) -> bool {
        self.config.keybindings.matches(action, key)
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage { text: text.into(), is_error: false });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage { text: text.into(), is_error: true });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // ========================================================================
    // NAVIGATION
    // ========================================================================

    pub fn open_selected(&mut self) {
        let Some(name) = self.panel.selected().map(|e| e.name.clone()) else {
            return;
        };
        match self.panel.open_selected(self.opener.as_ref()) {
            Some(OpenOutcome::Launched) => {
                self.set_info(format!("Opening {} (launcher errors go to burrow.log)", name));
            }
            Some(OpenOutcome::Stayed) => {
                // Gone since the last listing
                self.panel.refresh();
                self.set_error(format!("Cannot open folder: {}", name));
            }
            Some(OpenOutcome::Entered) | None => {}
        }
    }

    pub fn go_parent(&mut self) {
        self.panel.go_parent();
    }

    pub fn go_home(&mut self) {
        if self.panel.go_home() == NavOutcome::Unchanged && self.panel.nav.home().is_none() {
            self.set_error("Home directory is unknown");
        }
    }

    pub fn refresh(&mut self) {
        self.panel.refresh();
    }

    pub fn toggle_hidden(&mut self) {
        self.panel.toggle_hidden();
        let state = if self.panel.show_hidden { "shown" } else { "hidden" };
        self.set_info(format!("Hidden entries {}", state));
    }

    /// Navigate to a typed path; `~` expands and relative paths start here
    pub fn go_to(&mut self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }
        let target = expand_tilde(input, self.panel.nav.home());
        if self.panel.change_directory(&target) == NavOutcome::Unchanged {
            self.set_error(format!("No such folder: {}", input));
        }
    }

    // ========================================================================
    // PROMPTS
    // ========================================================================

    pub fn show_prompt(&mut self, kind: PromptKind) {
        self.mode = Mode::prompt(kind, "");
    }

    /// Rename prompt prefilled with the selected name
    pub fn show_rename_prompt(&mut self) {
        let Some(entry) = self.panel.selected().cloned() else {
            self.set_error("Nothing selected");
            return;
        };
        self.mode = Mode::prompt(PromptKind::Rename { old_name: entry.file_name }, &entry.name);
    }

    /// Act on a confirmed prompt. An empty answer just closes the dialog.
    pub fn submit_prompt(&mut self, kind: PromptKind, input: String) {
        self.mode = Mode::Normal;
        if input.trim().is_empty() {
            return;
        }
        match kind {
            PromptKind::NewFolder => self.create_directory(&input),
            PromptKind::NewFile => self.create_file(&input),
            PromptKind::Rename { old_name } => self.rename(&old_name, &input),
            PromptKind::GoTo => self.go_to(&input),
        }
    }

    // ========================================================================
    // FILE OPERATIONS
    // ========================================================================

    pub fn create_directory(&mut self, name: &str) {
        match self.panel.nav.create_directory(name) {
            Ok(_) => {
                self.panel.refresh();
                self.panel.select_name(name);
                self.set_info(format!("Created folder: {}", name));
            }
            Err(e) => self.report("Failed to create folder", &e),
        }
    }

    pub fn create_file(&mut self, name: &str) {
        match self.panel.nav.create_file(name) {
            Ok(_) => {
                self.panel.refresh();
                self.panel.select_name(name);
                self.set_info(format!("Created file: {}", name));
            }
            Err(e) => self.report("Failed to create file", &e),
        }
    }

    pub fn rename(&mut self, old_name: &OsStr, new_name: &str) {
        if old_name == OsStr::new(new_name) {
            return;
        }
        match self.panel.nav.rename(old_name, new_name) {
            Ok(_) => {
                self.panel.refresh();
                self.panel.select_name(new_name);
                self.set_info(format!("Renamed {} to {}", old_name.to_string_lossy(), new_name));
            }
            Err(e) => self.report("Failed to rename", &e),
        }
    }

    /// Start deleting the selected entry. Folders are refused outright;
    /// files are confirmed first unless confirmations are off.
    pub fn request_delete(&mut self) {
        let Some(entry) = self.panel.selected().cloned() else {
            self.set_error("Nothing selected");
            return;
        };
        if entry.is_dir() {
            self.set_error("Folder deletion is disabled");
            return;
        }
        if self.config.general.confirm_delete {
            self.mode = Mode::ConfirmDelete { name: entry.file_name, focus_yes: false };
        } else {
            self.delete_file(&entry.file_name);
        }
    }

    pub fn delete_file(&mut self, name: impl AsRef<OsStr>) {
        let name = name.as_ref();
        self.mode = Mode::Normal;
        match self.panel.nav.delete_file(name) {
            Ok(()) => {
                self.panel.refresh();
                self.set_info(format!("Deleted: {}", name.to_string_lossy()));
            }
            Err(e) => self.report("Failed to delete", &e),
        }
    }

    fn report(&mut self, what: &str, error: &NavError) {
        let detail = if error.is_collision() {
            tracing::debug!(error = %error, "{}", what);
            "an entry with that name already exists".to_string()
        } else {
            tracing::warn!(error = %error, "{}", what);
            error.to_string()
        };
        // The listing may be stale (another process changed the directory)
        self.panel.refresh();
        self.set_error(format!("{}: {}", what, detail));
    }

    // ========================================================================
    // DRIVES
    // ========================================================================

    pub fn show_drive_selector(&mut self) {
        let drives = get_available_drives();
        if drives.is_empty() {
            self.set_info("Drive selection is only available on Windows");
            return;
        }
        let current = self.panel.path().to_string_lossy().to_uppercase();
        let selected = drives
            .iter()
            .position(|d| current.starts_with(d.as_str()))
            .unwrap_or(0);
        self.mode = Mode::DriveSelector { drives, selected };
    }

    pub fn select_drive(&mut self, drive: &str) {
        self.mode = Mode::Normal;
        let root = drive_root(drive);
        if self.panel.change_directory(&root) == NavOutcome::Unchanged {
            self.set_error(format!("{} not available.", root.display()));
        }
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Persist the current directory if remember_path is on
    pub fn save_state(&mut self) {
        if !self.config.general.remember_path {
            return;
        }
        let Some(path) = self.config_path.clone() else {
            return;
        };
        self.config.general.last_path = Some(self.panel.path().to_string_lossy().into_owned());
        if let Err(e) = self.config.save_last_path(&path) {
            tracing::warn!(path = %path.display(), error = %e, "could not save last path");
        }
    }
}
