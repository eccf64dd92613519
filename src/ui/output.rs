//! Scrollback pane
//!
//! Renders the session buffer top-to-bottom inside a scroll area that
//! sticks to the bottom, so the most recently appended line stays visible
//! after every buffer mutation.

use eframe::egui;

use crate::models::BufferLine;

use super::colors::LineStyles;

/// Scrollback rendering component
pub struct OutputPane {
    /// Font size for terminal text
    font_size: f32,
}

impl OutputPane {
    /// Create a pane with the given font size
    pub fn new(font_size: f32) -> Self {
        Self { font_size }
    }

    /// Update the font size (config changes)
    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    /// Render the buffer lines.
    ///
    /// `stick_to_bottom` keeps the newest line visible unless the user has
    /// scrolled away; a fresh append snaps back to the bottom.
    pub fn render(&self, ui: &mut egui::Ui, lines: &[BufferLine], styles: &LineStyles) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 2.0;
                for line in lines {
                    // An empty label collapses to nothing; keep the row.
                    let text = if line.text.is_empty() { " " } else { &line.text };
                    ui.label(styles.line_text(line.kind, text, self.font_size));
                }
            });
    }
}

impl Default for OutputPane {
    fn default() -> Self {
        Self::new(14.0)
    }
}
