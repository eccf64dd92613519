//! Theme color mapping
//!
//! Adapts a `TerminalTheme` into the egui colors the terminal widgets
//! draw with, and provides the per-kind styling for buffer lines.

use eframe::egui;

use crate::config::theme::TerminalTheme;
use crate::models::LineKind;

/// Resolved egui colors for one theme
#[derive(Debug, Clone)]
pub struct LineStyles {
    /// Terminal background
    pub background: egui::Color32,
    /// Header/chrome background
    pub panel: egui::Color32,
    /// Prompt prefix color
    pub prompt: egui::Color32,
    /// Echoed input text
    pub input: egui::Color32,
    /// Normal output text
    pub output: egui::Color32,
    /// Error text
    pub error: egui::Color32,
    /// Muted hint text
    pub muted: egui::Color32,
}

impl LineStyles {
    /// Resolve a theme into egui colors
    pub fn from_theme(theme: &TerminalTheme) -> Self {
        let c = &theme.colors;
        Self {
            background: c.background.to_egui(),
            panel: c.panel.to_egui(),
            prompt: c.prompt.to_egui(),
            input: c.input.to_egui(),
            output: c.output.to_egui(),
            error: c.error.to_egui(),
            muted: c.muted.to_egui(),
        }
    }

    /// Text color for a line of the given kind
    pub fn color_for(&self, kind: LineKind) -> egui::Color32 {
        match kind {
            LineKind::Input => self.input,
            LineKind::Output => self.output,
            LineKind::Error => self.error,
        }
    }

    /// Monospace rich text in the color for `kind`
    pub fn line_text(&self, kind: LineKind, text: &str, font_size: f32) -> egui::RichText {
        egui::RichText::new(text)
            .font(egui::FontId::monospace(font_size))
            .color(self.color_for(kind))
    }
}

impl Default for LineStyles {
    fn default() -> Self {
        Self::from_theme(&TerminalTheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_map_to_distinct_colors() {
        let styles = LineStyles::default();
        assert_ne!(styles.color_for(LineKind::Input), styles.color_for(LineKind::Error));
        assert_ne!(styles.color_for(LineKind::Output), styles.color_for(LineKind::Error));
    }

    #[test]
    fn test_from_theme_uses_theme_colors() {
        let theme = TerminalTheme::by_name("amber").unwrap();
        let styles = LineStyles::from_theme(&theme);
        assert_eq!(styles.error, theme.colors.error.to_egui());
    }
}
