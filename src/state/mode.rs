//! Application modes

use std::ffi::OsString;

/// What a text prompt is asking for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptKind {
    NewFolder,
    NewFile,
    /// Rename the entry currently called `old_name`
    Rename { old_name: OsString },
    /// Jump to a typed path
    GoTo,
}

impl PromptKind {
    pub fn title(&self) -> &'static str {
        match self {
            PromptKind::NewFolder => " New Folder ",
            PromptKind::NewFile => " New File ",
            PromptKind::Rename { .. } => " Rename ",
            PromptKind::GoTo => " Go To ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::NewFolder => "Folder name:",
            PromptKind::NewFile => "File name:",
            PromptKind::Rename { .. } => "New name:",
            PromptKind::GoTo => "Path:",
        }
    }
}

/// Current interaction mode; decides how keys are dispatched and what is drawn
#[derive(Clone, Debug, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help {
        scroll: usize,
    },
    /// Single-line text input dialog
    Prompt {
        kind: PromptKind,
        input: String,
        /// Cursor position in characters
        cursor: usize,
    },
    /// Yes/No before deleting the file `name`
    ConfirmDelete {
        name: OsString,
        focus_yes: bool,
    },
    /// Drive letter picker (Windows)
    DriveSelector {
        drives: Vec<String>,
        selected: usize,
    },
}

impl Mode {
    /// Prompt with the cursor placed after `initial`
    pub fn prompt(kind: PromptKind, initial: &str) -> Self {
        Mode::Prompt {
            kind,
            input: initial.to_string(),
            cursor: initial.chars().count(),
        }
    }
}
