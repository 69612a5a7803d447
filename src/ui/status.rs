//! Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::Theme;
use crate::config::KeyBindings;
use crate::state::app::StatusMessage;

/// Key hints shown when there is no message: (action, short label)
const HINTS: &[(&str, &str)] = &[
    ("help", "Help"),
    ("go_to", "Go"),
    ("new_file", "File"),
    ("rename", "Rename"),
    ("mkdir", "Folder"),
    ("delete", "Delete"),
    ("quit", "Quit"),
];

/// Bottom line: the last message, or key hints when there is none
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    bindings: &'a KeyBindings,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(message: Option<&'a StatusMessage>, bindings: &'a KeyBindings, theme: &'a Theme) -> Self {
        Self { message, bindings, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let style = match self.message {
            Some(msg) if msg.is_error => Style::default().bg(self.theme.status_error_bg).fg(self.theme.status_error_fg),
            _ => Style::default().bg(self.theme.status_bg).fg(self.theme.status_fg),
        };

        // Clear the line with background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ').set_style(style);
        }

        if let Some(msg) = self.message {
            let text: String = format!(" {}", msg.text).chars().take(area.width as usize).collect();
            buf.set_string(area.x, area.y, &text, style);
            return;
        }

        let key_style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_key)
            .add_modifier(Modifier::BOLD);
        let right = area.x + area.width;
        let mut x = area.x + 1;
        for (action, label) in HINTS {
            let key = self.bindings.get(action);
            if key.is_empty() {
                continue;
            }
            let width = (key.chars().count() + label.chars().count() + 2) as u16;
            if x + width > right {
                break;
            }
            buf.set_string(x, area.y, key, key_style);
            buf.set_string(x + key.chars().count() as u16 + 1, area.y, label, style);
            x += width + 1;
        }
    }
}
