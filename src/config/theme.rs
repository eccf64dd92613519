//! Terminal Color Themes
//!
//! Manages the color themes used to style the terminal overlay. A theme
//! assigns one color per line kind (input, output, error) plus the chrome
//! colors around them.

use eframe::egui;
use serde::{Deserialize, Serialize};

/// An RGBA color that can be serialized with themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a fully opaque color
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to an egui color
    pub fn to_egui(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

/// Color assignments for one terminal theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Terminal background
    pub background: Color,
    /// Header/chrome background
    pub panel: Color,
    /// Prompt prefix color
    pub prompt: Color,
    /// Echoed input text
    pub input: Color,
    /// Normal command output
    pub output: Color,
    /// Error lines
    pub error: Color,
    /// Muted hints (e.g. history help text)
    pub muted: Color,
}

/// A named terminal color theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalTheme {
    /// Theme name (lookup key)
    pub name: String,
    /// One-line description
    pub description: String,
    /// Color assignments
    pub colors: ThemeColors,
}

impl TerminalTheme {
    /// The built-in themes, default first.
    pub fn builtin_themes() -> Vec<TerminalTheme> {
        vec![
            TerminalTheme {
                name: "classic-green".to_string(),
                description: "Green-on-black phosphor look".to_string(),
                colors: ThemeColors {
                    background: Color::from_rgba(8, 10, 8, 245),
                    panel: Color::from_rgb(18, 24, 18),
                    prompt: Color::from_rgb(80, 220, 100),
                    input: Color::from_rgb(140, 240, 150),
                    output: Color::from_rgb(200, 205, 200),
                    error: Color::from_rgb(240, 100, 100),
                    muted: Color::from_rgb(110, 130, 110),
                },
            },
            TerminalTheme {
                name: "amber".to_string(),
                description: "Warm amber monochrome".to_string(),
                colors: ThemeColors {
                    background: Color::from_rgba(14, 10, 4, 245),
                    panel: Color::from_rgb(30, 22, 10),
                    prompt: Color::from_rgb(250, 180, 60),
                    input: Color::from_rgb(255, 205, 110),
                    output: Color::from_rgb(220, 200, 160),
                    error: Color::from_rgb(255, 110, 80),
                    muted: Color::from_rgb(150, 125, 85),
                },
            },
            TerminalTheme {
                name: "paper".to_string(),
                description: "Dark ink on a light panel".to_string(),
                colors: ThemeColors {
                    background: Color::from_rgb(246, 244, 238),
                    panel: Color::from_rgb(228, 224, 214),
                    prompt: Color::from_rgb(40, 110, 60),
                    input: Color::from_rgb(30, 60, 40),
                    output: Color::from_rgb(50, 50, 55),
                    error: Color::from_rgb(180, 50, 40),
                    muted: Color::from_rgb(140, 140, 135),
                },
            },
        ]
    }

    /// Look up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<TerminalTheme> {
        Self::builtin_themes().into_iter().find(|t| t.name == name)
    }

    /// The default theme.
    pub fn default_theme() -> TerminalTheme {
        Self::builtin_themes()
            .into_iter()
            .next()
            .unwrap_or_else(|| unreachable!("builtin theme list is non-empty"))
    }
}

impl Default for TerminalTheme {
    fn default() -> Self {
        Self::default_theme()
    }
}
