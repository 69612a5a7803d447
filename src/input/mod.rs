//! Input handling
//!
//! This module handles keyboard input dispatching based on the current application mode.

mod dialogs;
mod help;
mod normal;
mod text_field;

pub use help::help_lines;
pub use text_field::TextField;

use crossterm::event::KeyEvent;

use crate::state::app::App;
use crate::state::mode::Mode;

/// Handle a key event based on current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match &app.mode {
        Mode::Normal => normal::handle_normal_mode(app, key),
        Mode::Help { .. } => {
            let height = app.help_height;
            help::handle_help_mode(app, key, height);
        }
        Mode::Prompt { .. } => dialogs::handle_prompt_mode(app, key),
        Mode::ConfirmDelete { .. } => dialogs::handle_confirm_delete_mode(app, key),
        Mode::DriveSelector { .. } => dialogs::handle_drive_selector_mode(app, key),
    }
}
