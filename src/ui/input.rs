//! Input prompt component
//!
//! The pinned input row at the bottom of the terminal overlay: a prompt
//! label and a single-line editor bound to the session's input state.
//! Enter submits (even when empty), ArrowUp/ArrowDown drive history
//! recall, and focus returns to the editor after every submission.

use eframe::egui;

use crate::terminal::InputState;

use super::colors::LineStyles;

/// Input prompt component
pub struct InputPrompt {
    /// Font size for the prompt and editor
    font_size: f32,
    /// Whether focus should be grabbed on the next frame
    want_focus: bool,
}

impl InputPrompt {
    /// Create a prompt with the given font size
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            want_focus: true,
        }
    }

    /// Update the font size (config changes)
    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    /// Request focus on the next rendered frame (e.g. after reopening)
    pub fn grab_focus(&mut self) {
        self.want_focus = true;
    }

    /// Render the input row.
    ///
    /// Returns `true` when the user pressed Enter; the caller submits the
    /// input state's current text.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        prompt: &str,
        input: &mut InputState,
        styles: &LineStyles,
    ) -> bool {
        let mut submitted = false;

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(prompt)
                    .font(egui::FontId::monospace(self.font_size))
                    .color(styles.prompt),
            );

            let response = ui.add(
                egui::TextEdit::singleline(input.text_mut())
                    .font(egui::FontId::monospace(self.font_size))
                    .desired_width(f32::INFINITY)
                    .frame(false)
                    .text_color(styles.input)
                    .lock_focus(true),
            );

            if self.want_focus {
                response.request_focus();
                self.want_focus = false;
            }

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
                // Keep typing without clicking back into the field.
                response.request_focus();
            }

            if response.has_focus() {
                if ui.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
                    input.recall_previous();
                } else if ui.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
                    input.recall_next();
                }
            }
        });

        submitted
    }
}

impl Default for InputPrompt {
    fn default() -> Self {
        Self::new(14.0)
    }
}
