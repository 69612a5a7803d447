//! Normal mode handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::app::App;
use crate::state::mode::{Mode, PromptKind};

pub fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // Any key press dismisses the previous message
    app.clear_status();

    // Check configurable keybindings first
    // Application
    if app.key_matches("quit", &key) || app.key_matches("quit_alt", &key) {
        app.should_quit = true;
        return;
    }

    // Drive selector (check before help since Alt+F1 vs F1)
    if app.key_matches("drives", &key) {
        app.show_drive_selector();
        return;
    }
    if app.key_matches("help", &key) {
        app.mode = Mode::Help { scroll: 0 };
        return;
    }

    // Navigation
    if app.key_matches("open", &key) {
        app.open_selected();
        return;
    }
    if app.key_matches("go_parent", &key) {
        app.go_parent();
        return;
    }
    if app.key_matches("go_home", &key) {
        app.go_home();
        return;
    }
    if app.key_matches("go_to", &key) {
        app.show_prompt(PromptKind::GoTo);
        return;
    }

    // File operations
    if app.key_matches("new_file", &key) {
        app.show_prompt(PromptKind::NewFile);
        return;
    }
    if app.key_matches("mkdir", &key) {
        app.show_prompt(PromptKind::NewFolder);
        return;
    }
    if app.key_matches("rename", &key) {
        app.show_rename_prompt();
        return;
    }
    if app.key_matches("delete", &key) {
        app.request_delete();
        return;
    }

    // View
    if app.key_matches("toggle_hidden", &key) {
        app.toggle_hidden();
        return;
    }
    if app.key_matches("refresh", &key) {
        app.refresh();
        return;
    }

    // Cursor movement (not configurable)
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up => app.panel.move_up(),
        KeyCode::Down => app.panel.move_down(),
        KeyCode::PageUp => app.panel.page_up(),
        KeyCode::PageDown => app.panel.page_down(),
        KeyCode::Home => app.panel.move_home(),
        KeyCode::End => app.panel.move_end(),
        KeyCode::Char('k') if !ctrl => app.panel.move_up(),
        KeyCode::Char('j') if !ctrl => app.panel.move_down(),
        KeyCode::Char('b') if ctrl => app.panel.page_up(),
        KeyCode::Char('f') if ctrl => app.panel.page_down(),
        _ => {}
    }
}
