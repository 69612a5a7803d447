//! Color theme system
//!
//! Provides built-in presets (dark, classic, light) and per-color overrides.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel colors
    pub panel_border: Color,
    pub panel_header: Color,
    pub panel_background: Color,
    pub panel_error: Color,

    // File list colors
    pub file_normal: Color,
    pub file_directory: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,
    pub status_key: Color,
    pub status_error_bg: Color,
    pub status_error_fg: Color,

    // Dialogs
    pub dialog_bg: Color,
    pub dialog_border: Color,
    pub dialog_delete_bg: Color,
    pub dialog_delete_border: Color,
    pub dialog_title: Color,
    pub dialog_text: Color,
    pub dialog_input_bg: Color,
    pub dialog_input_fg: Color,
    pub dialog_button_focused_bg: Color,
    pub dialog_button_focused_fg: Color,
    pub dialog_button_unfocused: Color,
    pub dialog_help: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        let teal = Color::Rgb(0, 150, 136);
        let gold = Color::Rgb(200, 170, 100);
        let light_gray = Color::Rgb(171, 178, 191);
        let dark_gray = Color::Rgb(76, 82, 99);
        let charcoal = Color::Rgb(58, 58, 58);

        Self {
            panel_border: teal,
            panel_header: gold,
            panel_background: charcoal,
            panel_error: Color::Rgb(224, 108, 117),

            file_normal: Color::Rgb(220, 220, 220),
            file_directory: Color::Rgb(171, 175, 135),  // sage green
            cursor_bg: Color::Rgb(0, 95, 95),
            cursor_fg: Color::Rgb(220, 220, 220),

            status_bg: Color::Rgb(45, 45, 45),
            status_fg: light_gray,
            status_key: gold,
            status_error_bg: Color::Rgb(180, 60, 60),
            status_error_fg: Color::White,

            dialog_bg: Color::Rgb(60, 40, 25),
            dialog_border: Color::Rgb(210, 140, 60),
            dialog_delete_bg: Color::Rgb(55, 35, 35),
            dialog_delete_border: Color::Rgb(224, 108, 117),
            dialog_title: Color::White,
            dialog_text: light_gray,
            dialog_input_bg: dark_gray,
            dialog_input_fg: Color::White,
            dialog_button_focused_bg: teal,
            dialog_button_focused_fg: Color::Black,
            dialog_button_unfocused: light_gray,
            dialog_help: Color::Rgb(130, 135, 150),
        }
    }

    /// Classic Norton Commander blue
    pub fn classic() -> Self {
        let blue = Color::Rgb(0, 0, 170);
        let cyan = Color::Rgb(85, 255, 255);
        let yellow = Color::Rgb(255, 255, 85);
        let gray = Color::Rgb(170, 170, 170);

        Self {
            panel_border: cyan,
            panel_header: yellow,
            panel_background: blue,
            panel_error: Color::LightRed,

            file_normal: cyan,
            file_directory: Color::White,
            cursor_bg: Color::Rgb(0, 170, 170),
            cursor_fg: Color::Black,

            status_bg: Color::Rgb(0, 170, 170),
            status_fg: Color::Black,
            status_key: Color::White,
            status_error_bg: Color::Red,
            status_error_fg: Color::White,

            dialog_bg: gray,
            dialog_border: Color::Black,
            dialog_delete_bg: Color::Rgb(170, 0, 0),
            dialog_delete_border: Color::White,
            dialog_title: Color::Black,
            dialog_text: Color::Black,
            dialog_input_bg: Color::Rgb(0, 170, 170),
            dialog_input_fg: Color::Black,
            dialog_button_focused_bg: Color::Black,
            dialog_button_focused_fg: Color::White,
            dialog_button_unfocused: Color::Black,
            dialog_help: Color::Rgb(85, 85, 85),
        }
    }

    /// Light theme for bright terminals
    pub fn light() -> Self {
        let navy = Color::Rgb(30, 60, 120);
        let white = Color::Rgb(250, 250, 250);

        Self {
            panel_border: navy,
            panel_header: Color::Rgb(140, 80, 0),
            panel_background: white,
            panel_error: Color::Rgb(180, 30, 30),

            file_normal: Color::Rgb(40, 40, 40),
            file_directory: navy,
            cursor_bg: Color::Rgb(190, 215, 240),
            cursor_fg: Color::Black,

            status_bg: Color::Rgb(225, 225, 225),
            status_fg: Color::Rgb(40, 40, 40),
            status_key: navy,
            status_error_bg: Color::Rgb(200, 60, 60),
            status_error_fg: Color::White,

            dialog_bg: Color::Rgb(240, 235, 220),
            dialog_border: Color::Rgb(140, 80, 0),
            dialog_delete_bg: Color::Rgb(250, 225, 225),
            dialog_delete_border: Color::Rgb(180, 30, 30),
            dialog_title: Color::Black,
            dialog_text: Color::Rgb(40, 40, 40),
            dialog_input_bg: Color::White,
            dialog_input_fg: Color::Black,
            dialog_button_focused_bg: navy,
            dialog_button_focused_fg: Color::White,
            dialog_button_unfocused: Color::Rgb(40, 40, 40),
            dialog_help: Color::Rgb(110, 110, 110),
        }
    }

    /// Get a theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "classic" => Some(Self::classic()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Apply custom color overrides from config
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        for (key, value) in overrides {
            let Some(color) = parse_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring unparseable theme color");
                continue;
            };
            match key.as_str() {
                "panel_border" => self.panel_border = color,
                "panel_header" => self.panel_header = color,
                "panel_background" => self.panel_background = color,
                "panel_error" => self.panel_error = color,
                "file_normal" => self.file_normal = color,
                "file_directory" => self.file_directory = color,
                "cursor_bg" => self.cursor_bg = color,
                "cursor_fg" => self.cursor_fg = color,
                "status_bg" => self.status_bg = color,
                "status_fg" => self.status_fg = color,
                "status_key" => self.status_key = color,
                "status_error_bg" => self.status_error_bg = color,
                "status_error_fg" => self.status_error_fg = color,
                "dialog_bg" => self.dialog_bg = color,
                "dialog_border" => self.dialog_border = color,
                "dialog_delete_bg" => self.dialog_delete_bg = color,
                "dialog_delete_border" => self.dialog_delete_border = color,
                "dialog_title" => self.dialog_title = color,
                "dialog_text" => self.dialog_text = color,
                "dialog_input_bg" => self.dialog_input_bg = color,
                "dialog_input_fg" => self.dialog_input_fg = color,
                "dialog_button_focused_bg" => self.dialog_button_focused_bg = color,
                "dialog_button_focused_fg" => self.dialog_button_focused_fg = color,
                "dialog_button_unfocused" => self.dialog_button_unfocused = color,
                "dialog_help" => self.dialog_help = color,
                _ => {} // Ignore unknown keys
            }
        }
        self
    }
}

/// Theme configuration for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Active preset: "dark", "classic" or "light"
    pub preset: String,
    /// Custom color overrides for the active preset
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: "dark".to_string(),
            colors: HashMap::new(),
        }
    }
}

impl ThemeConfig {
    /// Build a Theme from this config. Unknown presets fall back to dark.
    pub fn build_theme(&self) -> Theme {
        let base = Theme::by_name(&self.preset).unwrap_or_else(|| {
            tracing::warn!(preset = %self.preset, "unknown theme preset, using dark");
            Theme::dark()
        });
        base.with_overrides(&self.colors)
    }
}

/// Parse a color string into a ratatui Color
///
/// Supports:
/// - Named colors: "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "gray"
/// - Light variants: "light_red", "light_green", etc.
/// - RGB hex: "#RRGGBB" or "RRGGBB"
/// - RGB decimal: "rgb(R,G,B)"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    let named = match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "light_red" | "lightred" => Some(Color::LightRed),
        "light_green" | "lightgreen" => Some(Color::LightGreen),
        "light_yellow" | "lightyellow" => Some(Color::LightYellow),
        "light_blue" | "lightblue" => Some(Color::LightBlue),
        "light_magenta" | "lightmagenta" => Some(Color::LightMagenta),
        "light_cyan" | "lightcyan" => Some(Color::LightCyan),
        "reset" => Some(Color::Reset),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    let hex = s.strip_prefix('#').unwrap_or(&s);
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    let inner = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Some(Color::Rgb(r, g, b)),
        _ => None,
    }
}
