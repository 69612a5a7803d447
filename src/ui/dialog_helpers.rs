//! Shared drawing code for the dialogs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use super::Theme;

/// Styles for one dialog, derived from the theme and a background.
pub struct DialogStyles {
    pub border: Style,
    pub title: Style,
    pub label: Style,
    pub input: Style,
    pub button_focused: Style,
    pub button_unfocused: Style,
    pub help: Style,
    pub bg: Style,
}

impl DialogStyles {
    pub fn new(theme: &Theme, bg_color: Color, border_color: Color) -> Self {
        Self {
            border: Style::default().bg(bg_color).fg(border_color),
            title: Style::default().bg(bg_color).fg(theme.dialog_title).add_modifier(Modifier::BOLD),
            label: Style::default().bg(bg_color).fg(theme.dialog_text),
            input: Style::default().bg(theme.dialog_input_bg).fg(theme.dialog_input_fg),
            button_focused: Style::default()
                .fg(theme.dialog_button_focused_fg)
                .bg(theme.dialog_button_focused_bg)
                .add_modifier(Modifier::BOLD),
            button_unfocused: Style::default().fg(theme.dialog_button_unfocused).bg(bg_color),
            help: Style::default().bg(bg_color).fg(theme.dialog_help),
            bg: Style::default().bg(bg_color),
        }
    }

    /// Regular dialog colors
    pub fn normal(theme: &Theme) -> Self {
        Self::new(theme, theme.dialog_bg, theme.dialog_border)
    }

    /// Warning colors for destructive actions
    pub fn delete(theme: &Theme) -> Self {
        Self::new(theme, theme.dialog_delete_bg, theme.dialog_delete_border)
    }
}

pub struct DialogRenderer;

impl DialogRenderer {
    /// Centered dialog area, or None if `area` is too small for it.
    pub fn center_dialog(area: Rect, width: u16, height: u16, min_width: u16) -> Option<Rect> {
        if area.width < min_width || area.height < height {
            return None;
        }

        let dialog_width = width.min(area.width.saturating_sub(4));
        let x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;

        Some(Rect {
            x,
            y,
            width: dialog_width,
            height,
        })
    }

    /// Clear the dialog area and draw its frame and title.
    pub fn draw_frame(area: Rect, buf: &mut Buffer, title: &str, styles: &DialogStyles) {
        for row in area.y..area.y + area.height {
            for col in area.x..area.x + area.width {
                buf[(col, row)].set_char(' ').set_style(styles.bg);
            }
        }
        if area.width < 2 || area.height < 2 {
            return;
        }

        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;
        buf[(area.x, area.y)].set_char('┌').set_style(styles.border);
        buf[(right, area.y)].set_char('┐').set_style(styles.border);
        buf[(area.x, bottom)].set_char('└').set_style(styles.border);
        buf[(right, bottom)].set_char('┘').set_style(styles.border);
        for col in area.x + 1..right {
            buf[(col, area.y)].set_char('─').set_style(styles.border);
            buf[(col, bottom)].set_char('─').set_style(styles.border);
        }
        for row in area.y + 1..bottom {
            buf[(area.x, row)].set_char('│').set_style(styles.border);
            buf[(right, row)].set_char('│').set_style(styles.border);
        }

        let title_width = title.chars().count() as u16;
        let title_x = area.x + area.width.saturating_sub(title_width) / 2;
        buf.set_string(title_x, area.y, title, styles.title);
    }

    /// Draw a centered row of buttons.
    pub fn draw_buttons(area: Rect, buf: &mut Buffer, y_offset: u16, buttons: &[(&str, bool)], styles: &DialogStyles) {
        let button_y = area.y + y_offset;

        let total_width: usize = buttons.iter()
            .map(|(text, _)| text.chars().count())
            .sum::<usize>() + (buttons.len().saturating_sub(1)) * 2;

        let mut x = area.x + (area.width.saturating_sub(total_width as u16)) / 2;

        for (text, is_focused) in buttons {
            let style = if *is_focused { styles.button_focused } else { styles.button_unfocused };
            buf.set_string(x, button_y, text, style);
            x += text.chars().count() as u16 + 2;
        }
    }

    /// Draw a single-line input, scrolled so the cursor stays visible.
    /// Returns the screen column of the cursor.
    pub fn draw_input_field(buf: &mut Buffer, x: u16, y: u16, width: usize, text: &str, cursor: usize, style: Style) -> u16 {
        for col in x..x + width as u16 {
            buf[(col, y)].set_char(' ').set_style(style);
        }

        let (skip, column) = input_window(cursor, width);
        let visible: String = text.chars().skip(skip).take(width).collect();
        buf.set_string(x, y, &visible, style);
        x + column as u16
    }

    /// Draw help text centered on the last inner row.
    pub fn draw_help(area: Rect, buf: &mut Buffer, text: &str, style: Style) {
        let help_x = area.x + (area.width.saturating_sub(text.chars().count() as u16)) / 2;
        buf.set_string(help_x, area.y + area.height - 2, text, style);
    }
}

/// Characters to skip and cursor column for an input `width` wide
pub(super) fn input_window(cursor: usize, width: usize) -> (usize, usize) {
    if width == 0 {
        return (0, 0);
    }
    let skip = (cursor + 1).saturating_sub(width);
    (skip, cursor - skip)
}
