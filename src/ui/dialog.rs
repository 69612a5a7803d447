//! Dialog widgets

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::dialog_helpers::{input_window, DialogRenderer, DialogStyles};
use super::Theme;
use crate::state::mode::PromptKind;

const PROMPT_WIDTH: u16 = 56;
const PROMPT_HEIGHT: u16 = 7;

/// Single-line text prompt
pub struct PromptDialog<'a> {
    kind: &'a PromptKind,
    input: &'a str,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> PromptDialog<'a> {
    pub fn new(kind: &'a PromptKind, input: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self { kind, input, cursor, theme }
    }
}

impl Widget for PromptDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dialog_area) = DialogRenderer::center_dialog(area, PROMPT_WIDTH, PROMPT_HEIGHT, 20) else {
            return;
        };
        let styles = DialogStyles::normal(self.theme);
        DialogRenderer::draw_frame(dialog_area, buf, self.kind.title(), &styles);

        let content_x = dialog_area.x + 2;
        let content_width = dialog_area.width.saturating_sub(4) as usize;

        let label = match self.kind {
            PromptKind::Rename { old_name } => format!("{} (was {})", self.kind.label(), old_name.to_string_lossy()),
            _ => self.kind.label().to_string(),
        };
        let label: String = label.chars().take(content_width).collect();
        buf.set_string(content_x, dialog_area.y + 1, &label, styles.label);

        DialogRenderer::draw_input_field(buf, content_x, dialog_area.y + 3, content_width, self.input, self.cursor, styles.input);
        DialogRenderer::draw_help(dialog_area, buf, "Enter=OK  Esc=Cancel", styles.help);
    }
}

/// Terminal cursor position inside the prompt input
pub fn prompt_cursor_position(area: Rect, cursor: usize) -> Option<(u16, u16)> {
    let dialog_area = DialogRenderer::center_dialog(area, PROMPT_WIDTH, PROMPT_HEIGHT, 20)?;
    let content_width = dialog_area.width.saturating_sub(4) as usize;
    let (_, column) = input_window(cursor, content_width);
    Some((dialog_area.x + 2 + column as u16, dialog_area.y + 3))
}

/// Yes/No confirmation before deleting a file
pub struct ConfirmDeleteDialog<'a> {
    name: &'a str,
    focus_yes: bool,
    theme: &'a Theme,
}

impl<'a> ConfirmDeleteDialog<'a> {
    pub fn new(name: &'a str, focus_yes: bool, theme: &'a Theme) -> Self {
        Self { name, focus_yes, theme }
    }
}

impl Widget for ConfirmDeleteDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dialog_area) = DialogRenderer::center_dialog(area, 50, 8, 20) else {
            return;
        };
        let styles = DialogStyles::delete(self.theme);
        DialogRenderer::draw_frame(dialog_area, buf, " Delete ", &styles);

        let content_x = dialog_area.x + 2;
        let content_width = dialog_area.width.saturating_sub(4) as usize;

        buf.set_string(content_x, dialog_area.y + 1, "Delete this file?", styles.label);
        let name: String = self.name.chars().take(content_width).collect();
        buf.set_string(content_x, dialog_area.y + 2, &name, styles.title);

        DialogRenderer::draw_buttons(
            dialog_area, buf, 4,
            &[("[ Yes ]", self.focus_yes), ("[ No ]", !self.focus_yes)],
            &styles,
        );
        DialogRenderer::draw_help(dialog_area, buf, "Y=Yes  N/Esc=No  Tab=Switch", styles.help);
    }
}

/// Drive letter picker
pub struct DriveSelectorDialog<'a> {
    drives: &'a [String],
    selected: usize,
    theme: &'a Theme,
}

impl<'a> DriveSelectorDialog<'a> {
    pub fn new(drives: &'a [String], selected: usize, theme: &'a Theme) -> Self {
        Self { drives, selected, theme }
    }
}

impl Widget for DriveSelectorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (self.drives.len() as u16 + 4).min(area.height.saturating_sub(2));
        let Some(dialog_area) = DialogRenderer::center_dialog(area, 24, height, 16) else {
            return;
        };
        let styles = DialogStyles::normal(self.theme);
        DialogRenderer::draw_frame(dialog_area, buf, " Drive ", &styles);

        let rows = dialog_area.height.saturating_sub(4) as usize;
        let skip = (self.selected + 1).saturating_sub(rows);
        let row_width = dialog_area.width.saturating_sub(4) as usize;

        for (i, drive) in self.drives.iter().enumerate().skip(skip).take(rows) {
            let y = dialog_area.y + 1 + (i - skip) as u16;
            let style = if i == self.selected { styles.button_focused } else { styles.label };
            let text = format!(" {:<width$}", drive, width = row_width.saturating_sub(1));
            buf.set_string(dialog_area.x + 2, y, &text, style);
        }

        DialogRenderer::draw_help(dialog_area, buf, "Enter=Go  Esc=Cancel", styles.help);
    }
}
