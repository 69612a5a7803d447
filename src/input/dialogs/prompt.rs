//! Text prompt handler (new folder, new file, rename, go to)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::input::TextField;
use crate::state::app::App;
use crate::state::mode::Mode;

pub fn handle_prompt_mode(app: &mut App, key: KeyEvent) {
    let Mode::Prompt { kind, input, cursor } = &mut app.mode else {
        return;
    };
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
        }

        KeyCode::Enter => {
            let kind = kind.clone();
            let input = std::mem::take(input);
            app.submit_prompt(kind, input);
        }

        KeyCode::Backspace => TextField::backspace(input, cursor),
        KeyCode::Delete => TextField::delete(input, *cursor),
        KeyCode::Left => TextField::left(cursor),
        KeyCode::Right => TextField::right(input, cursor),
        KeyCode::Home => TextField::home(cursor),
        KeyCode::End => TextField::end(input, cursor),
        KeyCode::Char('u') if ctrl => TextField::clear_before(input, cursor),
        KeyCode::Char('a') if ctrl => TextField::home(cursor),
        KeyCode::Char('e') if ctrl => TextField::end(input, cursor),
        KeyCode::Char(c) if !ctrl => TextField::insert_char(input, cursor, c),
        _ => {}
    }
}
