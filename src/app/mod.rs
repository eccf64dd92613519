//! Main application structure and state management
//!
//! `FolioTermApp` implements the `eframe::App` trait and owns everything
//! the shell needs: the landing page, the terminal overlay, and the
//! deferred close triggered by the `exit` command.
//!
//! ## UI Layout
//!
//! ```text
//! +-----------------------------------------+
//! | Top Panel (app name, version)           |
//! +-----------------------------------------+
//! |                                         |
//! | Central Panel (landing page)            |
//! |                                         |
//! |   +---------------------------------+   |
//! |   | Terminal overlay (egui window)  |   |
//! |   |  - scrollback pane              |   |
//! |   |  - pinned input prompt          |   |
//! |   +---------------------------------+   |
//! +-----------------------------------------+
//! ```
//!
//! ## Deferred close
//!
//! `exit` does not tear the overlay down immediately: the farewell line
//! stays visible for the configured delay, tracked as a deadline checked
//! every frame. Dismissing the overlay through the window control cancels
//! the deadline, so no stale close fires after the session is gone.

use std::time::Instant;

use arboard::Clipboard;
use eframe::egui;
use tracing::{debug, info, warn};

use folioterm::config::theme::TerminalTheme;
use folioterm::ui::{InputPrompt, LineStyles, OutputPane};
use folioterm::{Config, Profile, Startup, SubmitOutcome, Terminal};

/// Main FolioTerm application
pub struct FolioTermApp {
    /// Application configuration
    config: Config,
    /// The profile record (read-only, loaded once)
    profile: Profile,
    /// Resolved theme colors
    styles: LineStyles,
    /// Scrollback renderer
    output_pane: OutputPane,
    /// Input prompt widget
    input_prompt: InputPrompt,
    /// The mounted terminal session, if the overlay is open
    terminal: Option<Terminal>,
    /// Deadline for the deferred close scheduled by `exit`
    pending_close: Option<Instant>,
}

impl FolioTermApp {
    /// Create the application from loaded startup data
    pub fn new(cc: &eframe::CreationContext<'_>, startup: Startup) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let Startup { config, profile } = startup;
        let theme = TerminalTheme::by_name(&config.ui.theme_name).unwrap_or_default();
        let font_size = config.ui.font_size as f32;

        info!(theme = %theme.name, "application shell ready");
        Self {
            styles: LineStyles::from_theme(&theme),
            output_pane: OutputPane::new(font_size),
            input_prompt: InputPrompt::new(font_size),
            terminal: None,
            pending_close: None,
            config,
            profile,
        }
    }

    /// Mount the terminal overlay (no-op if already open)
    fn open_terminal(&mut self) {
        if self.terminal.is_none() {
            self.terminal = Some(Terminal::new(&self.profile, &self.config.terminal));
            self.input_prompt.grab_focus();
        }
    }

    /// Unmount the overlay and cancel any pending deferred close
    fn close_terminal(&mut self) {
        if let Some(terminal) = self.terminal.take() {
            info!(session = %terminal.id(), "terminal session closed");
        }
        self.pending_close = None;
    }

    /// Copy the session transcript to the system clipboard
    fn copy_transcript(&self) {
        let Some(terminal) = &self.terminal else {
            return;
        };
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(terminal.transcript_text()) {
                    warn!("Failed to copy transcript: {}", e);
                } else {
                    debug!("transcript copied to clipboard");
                }
            }
            Err(e) => warn!("Clipboard unavailable: {}", e),
        }
    }

    fn render_landing(&mut self, ui: &mut egui::Ui) {
        let identity = &self.profile.identity;
        let mut open_requested = false;

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.heading(
                egui::RichText::new(&identity.name)
                    .size(32.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(&identity.title)
                    .size(18.0)
                    .color(self.styles.prompt),
            );

            ui.add_space(16.0);
            if !identity.objective.is_empty() {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&identity.objective).color(self.styles.output),
                    )
                    .wrap(true),
                );
            }

            ui.add_space(12.0);
            let mut contact_bits = vec![identity.email.clone()];
            if !identity.github.is_empty() {
                contact_bits.push(identity.github.clone());
            }
            if !identity.linkedin.is_empty() {
                contact_bits.push(identity.linkedin.clone());
            }
            ui.label(
                egui::RichText::new(contact_bits.join("  |  "))
                    .color(self.styles.muted),
            );

            ui.add_space(32.0);
            if ui
                .button(egui::RichText::new(">_ Open terminal").size(16.0))
                .clicked()
            {
                open_requested = true;
            }
            ui.label(
                egui::RichText::new("Ctrl+T toggles the terminal")
                    .small()
                    .color(self.styles.muted),
            );
        });

        if open_requested {
            self.open_terminal();
        }
    }

    fn render_terminal_window(&mut self, ctx: &egui::Context) {
        let Some(terminal) = self.terminal.as_mut() else {
            return;
        };

        let title = terminal.prompt().trim_end().to_string();
        let prompt = terminal.prompt().to_string();
        let mut open = true;
        let mut copy_requested = false;
        let mut outcome = None;

        egui::Window::new(title)
            .open(&mut open)
            .default_size([
                self.config.terminal.overlay_width,
                self.config.terminal.overlay_height,
            ])
            .resizable(true)
            .collapsible(false)
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(self.styles.background)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.small_button("Copy transcript").clicked() {
                        copy_requested = true;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new("Up/Down for history")
                                .small()
                                .color(self.styles.muted),
                        );
                    });
                });
                ui.separator();

                let input_height = 28.0;
                let output_height = (ui.available_height() - input_height).max(0.0);
                ui.allocate_ui(
                    egui::vec2(ui.available_width(), output_height),
                    |ui| {
                        self.output_pane.render(ui, terminal.lines(), &self.styles);
                    },
                );

                ui.separator();
                if self
                    .input_prompt
                    .render(ui, &prompt, terminal.input_mut(), &self.styles)
                {
                    outcome = Some(terminal.submit_current());
                }
            });

        if copy_requested {
            self.copy_transcript();
        }

        match outcome {
            Some(SubmitOutcome::Closing) => {
                // Keep the farewell visible for the configured delay.
                self.pending_close = Some(Instant::now() + self.config.terminal.exit_delay());
            }
            Some(SubmitOutcome::Cleared) | Some(SubmitOutcome::Appended) | None => {}
        }

        if !open {
            // Closed through the window control: cancels any pending
            // deferred close as well.
            self.close_terminal();
        }
    }
}

impl eframe::App for FolioTermApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Host-level toggle shortcut.
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::T)) {
            if self.terminal.is_some() {
                self.close_terminal();
            } else {
                self.open_terminal();
            }
        }

        // Fire or re-arm the deferred close scheduled by `exit`.
        if let Some(deadline) = self.pending_close {
            let now = Instant::now();
            if now >= deadline {
                self.close_terminal();
            } else {
                ctx.request_repaint_after(deadline - now);
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(folioterm::NAME).strong());
                ui.label(
                    egui::RichText::new(format!("v{}", folioterm::VERSION))
                        .small()
                        .color(self.styles.muted),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_landing(ui);
        });

        self.render_terminal_window(ctx);
    }
}
