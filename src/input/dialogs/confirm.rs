//! Delete confirmation handler

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::app::App;
use crate::state::mode::Mode;

pub fn handle_confirm_delete_mode(app: &mut App, key: KeyEvent) {
    let Mode::ConfirmDelete { name, focus_yes } = &mut app.mode else {
        return;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.mode = Mode::Normal;
        }

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            *focus_yes = !*focus_yes;
        }

        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let name = name.clone();
            app.delete_file(&name);
        }

        KeyCode::Enter => {
            if *focus_yes {
                let name = name.clone();
                app.delete_file(&name);
            } else {
                app.mode = Mode::Normal;
            }
        }

        _ => {}
    }
}
