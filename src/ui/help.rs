//! Help viewer widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::Theme;

/// Help viewer widget
pub struct HelpViewer<'a> {
    lines: &'a [String],
    scroll: usize,
    theme: &'a Theme,
}

impl<'a> HelpViewer<'a> {
    pub fn new(lines: &'a [String], scroll: usize, theme: &'a Theme) -> Self {
        Self { lines, scroll, theme }
    }

    /// Calculate the visible height (content area, excluding header and footer)
    pub fn content_height(area: Rect) -> usize {
        area.height.saturating_sub(2) as usize // -1 header, -1 footer
    }
}

/// Section headers are all caps or `===` underlines
fn is_heading(line: &str) -> bool {
    line.contains("===")
        || (!line.is_empty() && line.chars().all(|c| c.is_uppercase() || c.is_whitespace()))
}

impl Widget for HelpViewer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let bar_style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg)
            .add_modifier(Modifier::BOLD);
        let content_style = Style::default().bg(self.theme.panel_background).fg(self.theme.file_normal);
        let highlight_style = Style::default().bg(self.theme.panel_background).fg(self.theme.panel_header);

        // Header row
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ').set_style(bar_style);
        }
        let title = " Burrow Help ";
        let title_x = area.x + (area.width.saturating_sub(title.len() as u16)) / 2;
        buf.set_string(title_x, area.y, title, bar_style);

        let content_start_y = area.y + 1;
        let content_height = Self::content_height(area);
        let content_width = area.width.saturating_sub(1) as usize;

        for y in content_start_y..content_start_y + content_height as u16 {
            for x in area.x..area.x + area.width {
                buf[(x, y)].set_char(' ').set_style(content_style);
            }
        }

        for (i, line) in self.lines.iter().skip(self.scroll).take(content_height).enumerate() {
            let y = content_start_y + i as u16;
            let style = if is_heading(line) { highlight_style } else { content_style };
            let display_line: String = line.chars().take(content_width).collect();
            buf.set_string(area.x + 1, y, &display_line, style);
        }

        // Footer row
        let footer_y = area.y + area.height - 1;
        for x in area.x..area.x + area.width {
            buf[(x, footer_y)].set_char(' ').set_style(bar_style);
        }
        let max_scroll = self.lines.len().saturating_sub(content_height);
        let footer = format!(
            " Up/Down/PgUp/PgDn scroll  Esc close  {}/{} ",
            self.scroll.min(max_scroll),
            max_scroll
        );
        let footer: String = footer.chars().take(area.width as usize).collect();
        buf.set_string(area.x, footer_y, &footer, bar_style);
    }
}
