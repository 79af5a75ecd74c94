//! Context-aware header with breadcrumbs, toolbar and primary actions
//!
//! Everything rendered here derives from the resolved [`ContextConfig`];
//! the component holds no state of its own.

use eframe::egui;

use crate::context::{ActionStyle, ContextConfig};

/// Event emitted by the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEvent {
    /// A toolbar button was pressed; carries its dispatch key
    Toolbar(&'static str),
    /// A primary action button was pressed; carries its label
    Action(&'static str),
}

pub fn ui(ui: &mut egui::Ui, config: &'static ContextConfig) -> Option<HeaderEvent> {
    let mut event = None;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(config.title).heading().strong());
            ui.horizontal(|ui| {
                for (index, crumb) in config.breadcrumbs.iter().enumerate() {
                    if index > 0 {
                        ui.label(egui::RichText::new(">").weak().small());
                    }
                    ui.label(egui::RichText::new(*crumb).weak().small());
                }
            });
        });

        if !config.toolbar.is_empty() {
            ui.separator();
            for button in config.toolbar {
                if ui.small_button(button.label).clicked() {
                    event = Some(HeaderEvent::Toolbar(button.action));
                }
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Reversed so the primary action ends up leftmost in the group
            for action in config.actions.iter().rev() {
                let text = match action.style {
                    ActionStyle::Primary => egui::RichText::new(action.label).strong(),
                    ActionStyle::Outline => egui::RichText::new(action.label),
                };
                if ui.button(text).clicked() {
                    event = Some(HeaderEvent::Action(action.label));
                }
            }
        });
    });

    event
}
