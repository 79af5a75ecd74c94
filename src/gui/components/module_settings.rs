//! Modules page: enable or disable sidebar modules

use eframe::egui;

use super::super::constants::{ITEM_SPACING, SECTION_SPACING};
use crate::catalog;
use crate::module_prefs::ModulePrefs;

pub fn ui(ui: &mut egui::Ui, prefs: &mut ModulePrefs) {
    ui.label(egui::RichText::new("Sidebar Modules").heading().strong());
    ui.label("Choose which modules appear in the sidebar. Dashboard, Modules and Settings are always shown.");
    ui.add_space(SECTION_SPACING);

    ui.group(|ui| {
        for entry in catalog::MODULE_CATALOG {
            let mut enabled = prefs.is_enabled(entry.id);
            if ui.checkbox(&mut enabled, entry.label).changed() {
                prefs.toggle(entry.id);
            }
        }
    });

    ui.add_space(ITEM_SPACING);

    let count = prefs.enabled_count();
    if count == 0 {
        ui.label(
            egui::RichText::new("No modules enabled - the sidebar shows only the fixed items.")
                .weak(),
        );
    } else {
        ui.label(format!(
            "{count} of {} modules enabled",
            catalog::MODULE_CATALOG.len()
        ));
    }

    ui.add_space(SECTION_SPACING);

    if ui.button("Reset to defaults").clicked() {
        prefs.reset();
    }
}
