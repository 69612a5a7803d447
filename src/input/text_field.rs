//! Text field editing for prompt dialogs.
//!
//! The cursor counts characters, not bytes, so non-ASCII file names edit
//! correctly.

pub struct TextField;

impl TextField {
    fn byte_index(input: &str, cursor: usize) -> usize {
        input
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(input.len())
    }

    fn char_len(input: &str) -> usize {
        input.chars().count()
    }

    /// Delete character before cursor
    pub fn backspace(input: &mut String, cursor: &mut usize) {
        if *cursor > 0 {
            *cursor -= 1;
            let at = Self::byte_index(input, *cursor);
            input.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(input: &mut String, cursor: usize) {
        if cursor < Self::char_len(input) {
            let at = Self::byte_index(input, cursor);
            input.remove(at);
        }
    }

    pub fn left(cursor: &mut usize) {
        *cursor = cursor.saturating_sub(1);
    }

    pub fn right(input: &str, cursor: &mut usize) {
        if *cursor < Self::char_len(input) {
            *cursor += 1;
        }
    }

    pub fn home(cursor: &mut usize) {
        *cursor = 0;
    }

    pub fn end(input: &str, cursor: &mut usize) {
        *cursor = Self::char_len(input);
    }

    pub fn insert_char(input: &mut String, cursor: &mut usize, c: char) {
        let at = Self::byte_index(input, *cursor);
        input.insert(at, c);
        *cursor += 1;
    }

    /// Drop everything before the cursor (Ctrl+U)
    pub fn clear_before(input: &mut String, cursor: &mut usize) {
        let at = Self::byte_index(input, *cursor);
        input.replace_range(..at, "");
        *cursor = 0;
    }
}
