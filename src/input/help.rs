//! Help screen: text and scrolling

use crossterm::event::{KeyCode, KeyEvent};

use crate::config::{KeyBindings, ACTIONS};
use crate::state::app::App;
use crate::state::mode::Mode;

/// Help screen lines, built from the active key bindings
pub fn help_lines(bindings: &KeyBindings) -> Vec<String> {
    let mut lines = vec![
        "Burrow - Help".to_string(),
        String::new(),
        "KEYS".to_string(),
        "====".to_string(),
    ];
    for (action, description) in ACTIONS {
        let key = bindings.get(action);
        if key.is_empty() {
            continue;
        }
        lines.push(format!("  {:<14}{}", key, description));
    }
    lines.extend(
        [
            "",
            "MOVING",
            "======",
            "  Up, k         Previous entry",
            "  Down, j       Next entry",
            "  PageUp        Page up (also Ctrl+B)",
            "  PageDown      Page down (also Ctrl+F)",
            "  Home, End     First / last entry",
            "",
            "DIALOGS",
            "=======",
            "  Enter         Confirm",
            "  Esc           Cancel",
            "  Tab, Left     Switch Yes / No",
            "  Ctrl+U        Clear text before the cursor",
            "",
            "Folders are shown first, tagged in the listing.",
            "Folders are never deleted; F8 only removes files.",
            "Key bindings can be changed in the [keybindings] section of the config file.",
        ]
        .into_iter()
        .map(String::from),
    );
    lines
}

pub fn handle_help_mode(app: &mut App, key: KeyEvent, visible_height: usize) {
    let line_count = help_lines(&app.config.keybindings).len();
    let Mode::Help { scroll } = &mut app.mode else {
        return;
    };
    let max_scroll = line_count.saturating_sub(visible_height);

    match key.code {
        // Exit help
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }

        KeyCode::Up | KeyCode::Char('k') => {
            *scroll = scroll.saturating_sub(1);
        }

        KeyCode::Down | KeyCode::Char('j') => {
            if *scroll < max_scroll {
                *scroll += 1;
            }
        }

        KeyCode::PageUp => {
            *scroll = scroll.saturating_sub(visible_height);
        }

        KeyCode::PageDown => {
            *scroll = (*scroll + visible_height).min(max_scroll);
        }

        KeyCode::Home | KeyCode::Char('g') => {
            *scroll = 0;
        }

        KeyCode::End | KeyCode::Char('G') => {
            *scroll = max_scroll;
        }

        _ => {}
    }
}
