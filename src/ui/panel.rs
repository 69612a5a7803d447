//! Panel widget for displaying file listings

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, StatefulWidget, Widget},
};

use super::Theme;
use crate::config::DisplayConfig;
use crate::fs::Entry;
use crate::state::panel::Panel;
use crate::utils::display_path;

/// Height of the footer area (separator line + footer text line)
const FOOTER_HEIGHT: u16 = 2;

/// Widget for rendering the file panel
pub struct PanelWidget<'a> {
    theme: &'a Theme,
    display: &'a DisplayConfig,
}

impl<'a> PanelWidget<'a> {
    pub fn new(theme: &'a Theme, display: &'a DisplayConfig) -> Self {
        Self { theme, display }
    }

    /// Panel header: the current directory
    fn format_path(&self, panel: &Panel) -> String {
        let home = if self.display.home_tilde { panel.nav.home() } else { None };
        format!(" {} ", display_path(panel.path(), home))
    }

    fn footer(panel: &Panel) -> String {
        let dirs = panel.dir_count();
        let files = panel.file_count();
        format!(
            " {} folder{}, {} file{} ",
            dirs,
            if dirs == 1 { "" } else { "s" },
            files,
            if files == 1 { "" } else { "s" },
        )
    }

    /// Text of one listing row
    fn entry_label(&self, entry: &Entry) -> String {
        if entry.is_dir() {
            format!("{}{}", self.display.folder_tag, entry.name)
        } else {
            entry.name.clone()
        }
    }

    fn render_entries(&self, panel: &Panel, area: Rect, buf: &mut Buffer) {
        let bg = self.theme.panel_background;
        let width = area.width as usize;

        for (row, (index, entry)) in panel
            .entries
            .iter()
            .enumerate()
            .skip(panel.scroll_offset)
            .take(area.height as usize)
            .enumerate()
        {
            let y = area.y + row as u16;
            let style = if index == panel.cursor {
                Style::default().fg(self.theme.cursor_fg).bg(self.theme.cursor_bg)
            } else if entry.is_dir() {
                Style::default()
                    .fg(self.theme.file_directory)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.file_normal).bg(bg)
            };

            let label = fit_to_width(&self.entry_label(entry), width.saturating_sub(1));
            let text = format!(" {:<width$}", label, width = width.saturating_sub(1));
            buf.set_string(area.x, y, &text, style);
        }
    }
}

/// Cut `text` to `width` characters, marking the cut with `~`
fn fit_to_width(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('~');
    cut
}

impl StatefulWidget for PanelWidget<'_> {
    type State = Panel;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let panel_bg = self.theme.panel_background;
        let border_style = Style::default().fg(self.theme.panel_border).bg(panel_bg);
        let header_style = Style::default()
            .fg(self.theme.panel_header)
            .bg(panel_bg)
            .add_modifier(Modifier::BOLD);

        let block = Block::default()
            .title(Line::from(Span::styled(self.format_path(state), header_style)))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(panel_bg));

        let inner = block.inner(area);
        let content_area = Rect {
            height: inner.height.saturating_sub(FOOTER_HEIGHT),
            ..inner
        };

        // Update panel's visible height for navigation calculations
        state.set_visible_height(content_area.height as usize);

        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(error) = &state.error {
            let style = Style::default().fg(self.theme.panel_error).bg(panel_bg);
            let text = fit_to_width(&format!(" Cannot read folder: {}", error), inner.width as usize);
            buf.set_string(content_area.x, content_area.y, &text, style);
        } else if state.entries.is_empty() {
            let style = Style::default().fg(self.theme.file_normal).bg(panel_bg);
            buf.set_string(content_area.x, content_area.y, " (empty)", style);
        } else {
            self.render_entries(state, content_area, buf);
        }

        if inner.height < FOOTER_HEIGHT {
            return;
        }

        // Separator and footer
        let separator_y = inner.y + inner.height - FOOTER_HEIGHT;
        for x in inner.x..inner.x + inner.width {
            buf[(x, separator_y)].set_char('─').set_style(border_style);
        }
        let footer_style = Style::default().fg(self.theme.file_normal).bg(panel_bg);
        let footer = fit_to_width(&Self::footer(state), inner.width as usize);
        buf.set_string(inner.x, separator_y + 1, &footer, footer_style);
    }
}
