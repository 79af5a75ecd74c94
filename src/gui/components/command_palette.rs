//! Command palette (Ctrl+K)
//!
//! Floating window listing navigation and theme commands filtered by a
//! query string. The command list itself is rebuilt by the caller each
//! frame from the current sidebar composition.

use eframe::egui;

use crate::commands::{self, Command, CommandAction};

pub struct CommandPalette {
    open: bool,
    query: String,
}

impl CommandPalette {
    pub fn new() -> Self {
        Self {
            open: false,
            query: String::new(),
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.query.clear();
    }

    /// Shows the palette when open; returns the selected action, if any
    pub fn ui(&mut self, ctx: &egui::Context, available: &[Command]) -> Option<CommandAction> {
        if !self.open {
            return None;
        }

        let mut selected = None;
        let mut close = false;

        egui::Window::new("Command Palette")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 80.0])
            .show(ctx, |ui| {
                let response = ui.text_edit_singleline(&mut self.query);
                response.request_focus();

                ui.separator();

                let matches = commands::filter_commands(available, &self.query);
                if matches.is_empty() {
                    ui.label(egui::RichText::new("No results found.").weak());
                }

                let mut last_group = "";
                for command in matches {
                    if command.group != last_group {
                        ui.label(egui::RichText::new(command.group).weak().small());
                        last_group = command.group;
                    }
                    if ui.selectable_label(false, command.label).clicked() {
                        selected = Some(command.action);
                        close = true;
                    }
                }

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    close = true;
                }
            });

        if close {
            self.open = false;
            self.query.clear();
        }

        selected
    }
}
