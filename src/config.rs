//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::ui::ThemeConfig;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub display: DisplayConfig,
    /// Launcher override for files without a matching handler
    pub opener: OpenerConfig,
    /// File handler rules (pattern -> command)
    #[serde(default)]
    pub handlers: Vec<FileHandler>,
    pub theme: ThemeConfig,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeyBindings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory to start in (empty = home)
    pub start_dir: String,
    /// Show hidden files (starting with .)
    pub show_hidden: bool,
    /// Ask before deleting a file
    pub confirm_delete: bool,
    /// Save the current directory on exit and restore it on start
    pub remember_path: bool,
    /// Last directory (auto-saved when remember_path is on)
    pub last_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_dir: String::new(),
            show_hidden: true,
            confirm_delete: true,
            remember_path: false,
            last_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Label drawn in front of directory names (empty = none)
    pub folder_tag: String,
    /// Show the home directory as ~ in the header
    pub home_tilde: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            folder_tag: "[Folder] ".to_string(),
            home_tilde: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OpenerConfig {
    /// Command template; {} is replaced with the file path.
    /// Empty = platform default (xdg-open / open / explorer)
    pub command: String,
}

/// File handler rule: maps a regex pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileHandler {
    /// Regex matched case-insensitively against the file name (e.g. "\\.pdf$")
    pub pattern: String,
    /// Command to run. Use {} as placeholder for the file path.
    pub command: String,
}

/// Keyboard shortcut configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeyBindings {
    /// Custom keybindings (action -> key)
    #[serde(flatten)]
    pub bindings: HashMap<String, String>,
}

impl KeyBindings {
    /// Get the key binding for an action, falling back to default
    pub fn get(&self, action: &str) -> &str {
        self.bindings
            .get(action)
            .map(|s| s.as_str())
            .unwrap_or_else(|| default_keybinding(action))
    }

    /// Check if a key event matches an action
    pub fn matches(&self, action: &str, key: &crossterm::event::KeyEvent) -> bool {
        use crossterm::event::KeyCode;

        parse_key_binding(self.get(action))
            .map(|(code, mods)| {
                if key.modifiers != mods {
                    return false;
                }
                match (&key.code, &code) {
                    (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(b),
                    _ => key.code == code,
                }
            })
            .unwrap_or(false)
    }
}

/// Get the default key binding for an action
pub fn default_keybinding(action: &str) -> &'static str {
    match action {
        "quit" => "F10",
        "quit_alt" => "Ctrl+C",
        "help" => "F1",

        "open" => "Enter",
        "go_parent" => "Backspace",
        "go_home" => "F2",
        "go_to" => "F3",
        "drives" => "Alt+F1",

        "new_file" => "F4",
        "rename" => "F6",
        "mkdir" => "F7",
        "delete" => "F8",

        "toggle_hidden" => "Ctrl+H",
        "refresh" => "Ctrl+R",

        _ => "",
    }
}

/// Every bindable action, in help-screen order
pub const ACTIONS: &[(&str, &str)] = &[
    ("open", "Open file / enter folder"),
    ("go_parent", "Go up one folder"),
    ("go_home", "Go to home folder"),
    ("go_to", "Go to a path"),
    ("drives", "Choose drive (Windows)"),
    ("new_file", "New file"),
    ("rename", "Rename"),
    ("mkdir", "New folder"),
    ("delete", "Delete file"),
    ("toggle_hidden", "Show/hide hidden entries"),
    ("refresh", "Refresh listing"),
    ("help", "This help"),
    ("quit", "Quit"),
];

/// Parse a key binding string like "Ctrl+C", "Alt+F1", "F10", etc.
pub fn parse_key_binding(s: &str) -> Option<(crossterm::event::KeyCode, crossterm::event::KeyModifiers)> {
    use crossterm::event::KeyModifiers;

    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    // "+" alone or "Ctrl++" bind the plus key itself
    let (mods_part, key_part) = match s.strip_suffix("++") {
        Some(rest) => (Some(rest), "+"),
        None if s == "+" => (None, "+"),
        None => match s.rsplit_once('+') {
            Some((mods, key)) => (Some(mods), key),
            None => (None, s),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    for modifier in mods_part.into_iter().flat_map(|m| m.split('+')) {
        match modifier.trim().to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    Some((parse_key_code(key_part)?, modifiers))
}

/// Parse a key code string
fn parse_key_code(s: &str) -> Option<crossterm::event::KeyCode> {
    use crossterm::event::KeyCode;

    let lower = s.to_lowercase();

    // Function keys
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok())
        && (1..=12).contains(&n)
    {
        return Some(KeyCode::F(n));
    }

    match lower.as_str() {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "insert" | "ins" => Some(KeyCode::Insert),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            display: DisplayConfig::default(),
            opener: OpenerConfig::default(),
            handlers: Vec::new(),
            theme: ThemeConfig::default(),
            keybindings: KeyBindings::default(),
        }
    }
}

/// Get the config directory path for the current platform
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("burrow"))
}

/// Get the default config file path
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Get the log file path
pub fn log_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("burrow.log"))
}

/// Default config file content with comments
fn default_config() -> &'static str {
    r##"# burrow configuration
# This file is auto-generated. Edit as needed.

[general]
# Directory to start in (empty = home directory)
start_dir = ""

# Show hidden entries (names starting with .)
show_hidden = true

# Ask for confirmation before deleting a file
confirm_delete = true

# Save the current directory on exit and start there next time
remember_path = false

[display]
# Label drawn in front of folder names (empty = none)
folder_tag = "[Folder] "

# Show the home directory as ~ in the panel header
home_tilde = true

[opener]
# Program used to open files that match no handler below.
# {} is replaced with the file path (appended if missing).
# Empty = platform default: xdg-open (Linux/BSD), open (macOS), explorer (Windows)
command = ""

# Handlers pick a program by file name (regex, case-insensitive, first match wins)
# [[handlers]]
# pattern = "\\.(mp4|mkv|webm)$"
# command = "mpv {}"
#
# [[handlers]]
# pattern = "\\.pdf$"
# command = "zathura"

[theme]
# Preset: "dark", "classic" or "light"
preset = "dark"

# Color overrides for the active preset (name, #RRGGBB or rgb(R,G,B))
# [theme.colors]
# cursor_bg = "#005f5f"
# file_directory = "yellow"

[keybindings]
# Override any action; unlisted actions keep their defaults.
# Keys: F1-F12, Enter, Backspace, Esc, Tab, Home, End, letters, with Ctrl+/Alt+/Shift+
# open = "Enter"
# go_parent = "Backspace"
# go_home = "F2"
# go_to = "F3"
# new_file = "F4"
# rename = "F6"
# mkdir = "F7"
# delete = "F8"
# drives = "Alt+F1"
# toggle_hidden = "Ctrl+H"
# refresh = "Ctrl+R"
# help = "F1"
# quit = "F10"
"##
}

impl Config {
    /// Load configuration, creating the default file if it doesn't exist.
    ///
    /// Never fails: problems are logged and the defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(config_path) = path.map(Path::to_path_buf).or_else(config_file) else {
            tracing::warn!("could not determine config directory, using defaults");
            return Config::default();
        };

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    /// Load from `path`, writing the commented default first if it is missing
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(path, default_config())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        toml_edit::de::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Persist `general.last_path` into the file at `path`, keeping comments
    /// and every other setting as the user wrote them.
    pub fn save_last_path(&self, path: &Path) -> AppResult<()> {
        let existing = fs::read_to_string(path).unwrap_or_else(|_| default_config().to_string());
        let updated = self.update_last_path(&existing)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, updated)?;
        Ok(())
    }

    fn update_last_path(&self, existing: &str) -> AppResult<String> {
        use toml_edit::{value, DocumentMut, Item, Table};

        let mut doc: DocumentMut = existing
            .parse()
            .map_err(|e: toml_edit::TomlError| AppError::Config(e.to_string()))?;

        if !doc.contains_table("general") {
            doc.insert("general", Item::Table(Table::new()));
        }
        let Some(general) = doc.get_mut("general").and_then(|v| v.as_table_mut()) else {
            return Err(AppError::Config("[general] is not a table".to_string()));
        };

        match &self.general.last_path {
            Some(last) => general["last_path"] = value(last.as_str()),
            None => {
                general.remove("last_path");
            }
        }

        Ok(doc.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(default_config()).unwrap();
        assert!(config.general.show_hidden);
        assert!(config.general.confirm_delete);
        assert_eq!(config.display.folder_tag, "[Folder] ");
        assert!(config.opener.command.is_empty());
        assert!(config.handlers.is_empty());
        assert_eq!(config.theme.preset, "dark");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse(
            r#"
            [general]
            show_hidden = false

            [[handlers]]
            pattern = "\\.pdf$"
            command = "zathura {}"

            [keybindings]
            delete = "Delete"
            "#,
        )
        .unwrap();
        assert!(!config.general.show_hidden);
        assert!(config.general.confirm_delete);
        assert_eq!(config.handlers.len(), 1);
        assert_eq!(config.keybindings.get("delete"), "Delete");
        assert_eq!(config.keybindings.get("mkdir"), "F7");
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        assert!(matches!(Config::parse("[general"), Err(AppError::Config(_))));
    }

    #[test]
    fn test_parse_key_binding() {
        assert_eq!(parse_key_binding("F7"), Some((KeyCode::F(7), KeyModifiers::NONE)));
        assert_eq!(
            parse_key_binding("Ctrl+R"),
            Some((KeyCode::Char('R'), KeyModifiers::CONTROL))
        );
        assert_eq!(parse_key_binding("Alt+F1"), Some((KeyCode::F(1), KeyModifiers::ALT)));
        assert_eq!(
            parse_key_binding("ctrl++"),
            Some((KeyCode::Char('+'), KeyModifiers::CONTROL))
        );
        assert_eq!(parse_key_binding("Hyper+X"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_keybinding_matches() {
        let bindings = KeyBindings::default();
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(bindings.matches("refresh", &ctrl_r));
        assert!(!bindings.matches("refresh", &KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)));
        assert!(bindings.matches("open", &KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!bindings.matches("no_such_action", &ctrl_r));
    }

    #[test]
    fn test_every_action_has_default() {
        for (action, _) in ACTIONS {
            assert!(parse_key_binding(default_keybinding(action)).is_some(), "{action}");
        }
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert!(config.general.show_hidden);
    }

    #[test]
    fn test_save_last_path_preserves_comments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "# my settings\n[general]\n# keep this\nshow_hidden = false\n",
        )
        .unwrap();

        let mut config = Config::load_from(&path).unwrap();
        config.general.last_path = Some("/srv/data".to_string());
        config.save_last_path(&path).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("# my settings"));
        assert!(saved.contains("# keep this"));
        assert!(saved.contains("show_hidden = false"));

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.general.last_path.as_deref(), Some("/srv/data"));
    }
}
