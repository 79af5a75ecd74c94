//! Settings page: theme selection and preference reset

use eframe::egui;

use super::super::constants::{ITEM_SPACING, SECTION_SPACING};
use crate::theme::Theme;

/// Event from the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEvent {
    ThemeChanged(Theme),
    ResetPrefs,
}

pub fn ui(ui: &mut egui::Ui, current: Theme) -> Option<SettingsEvent> {
    let mut event = None;

    ui.label(egui::RichText::new("Appearance").heading().strong());
    ui.add_space(ITEM_SPACING);

    ui.group(|ui| {
        let mut selected = current;
        for theme in Theme::ALL {
            ui.radio_value(&mut selected, theme, theme.label());
        }
        if selected != current {
            event = Some(SettingsEvent::ThemeChanged(selected));
        }
    });

    ui.add_space(SECTION_SPACING);

    ui.label(egui::RichText::new("Preferences").heading().strong());
    ui.add_space(ITEM_SPACING);
    ui.label("Remove the stored sidebar modules and theme selection.");
    if ui.button("Reset all preferences").clicked() {
        event = Some(SettingsEvent::ResetPrefs);
    }

    event
}
