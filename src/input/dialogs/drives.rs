//! Drive selector handler

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::app::App;
use crate::state::mode::Mode;

pub fn handle_drive_selector_mode(app: &mut App, key: KeyEvent) {
    let Mode::DriveSelector { drives, selected } = &mut app.mode else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
        }

        KeyCode::Up => {
            if *selected > 0 {
                *selected -= 1;
            }
        }

        KeyCode::Down => {
            if *selected + 1 < drives.len() {
                *selected += 1;
            }
        }

        KeyCode::Enter => {
            if let Some(drive) = drives.get(*selected).cloned() {
                app.select_drive(&drive);
            } else {
                app.mode = Mode::Normal;
            }
        }

        // Jump straight to a drive by its letter
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            let letter = c.to_ascii_uppercase();
            if let Some(drive) = drives.iter().find(|d| d.starts_with(letter)).cloned() {
                app.select_drive(&drive);
            }
        }

        _ => {}
    }
}
