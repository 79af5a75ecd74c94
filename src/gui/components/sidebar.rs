//! Sidebar navigation list
//!
//! Renders the navigation anchors plus the user's enabled modules in
//! catalog order. The component only reads the preference store; toggling
//! happens on the Modules page.

use eframe::egui;

use super::super::constants::ITEM_SPACING;
use crate::catalog;
use crate::module_prefs::ModulePrefs;

/// Returns the route of a clicked item, if any
pub fn ui(ui: &mut egui::Ui, prefs: &ModulePrefs, current_route: &str) -> Option<&'static str> {
    let mut clicked = None;

    ui.heading("Novologic");
    ui.label(egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION"))).weak());
    ui.separator();

    for entry in catalog::sidebar_items(&prefs.enabled_entries()) {
        let selected = current_route == entry.route;
        if ui.selectable_label(selected, entry.label).clicked() {
            clicked = Some(entry.route);
        }
    }

    if prefs.enabled_count() == 0 {
        ui.add_space(ITEM_SPACING);
        ui.label(
            egui::RichText::new("No modules enabled yet. Add some under Modules.")
                .weak()
                .small(),
        );
    }

    clicked
}
