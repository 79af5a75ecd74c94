//! Project selection screen
//!
//! Full-window card list over the sample project directory with search and
//! status filtering. Shown before the dashboard chrome on startup and when
//! switching projects.

use eframe::egui;

use super::super::constants::{
    ITEM_SPACING, SECTION_SPACING, STATUS_ACTIVE, STATUS_COMPLETED, STATUS_ON_HOLD,
    STATUS_PLANNING,
};
use crate::projects::{self, ProjectStatus};

pub struct ProjectSelect {
    query: String,
    status: Option<ProjectStatus>,
}

impl ProjectSelect {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            status: None,
        }
    }

    fn status_color(status: ProjectStatus) -> egui::Color32 {
        match status {
            ProjectStatus::Active => STATUS_ACTIVE,
            ProjectStatus::Planning => STATUS_PLANNING,
            ProjectStatus::Completed => STATUS_COMPLETED,
            ProjectStatus::OnHold => STATUS_ON_HOLD,
        }
    }

    /// Returns the chosen project id, if any
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<&'static str> {
        let mut chosen = None;

        ui.heading("Select a project");
        ui.label(egui::RichText::new("Pick the construction project to work in.").weak());
        ui.add_space(SECTION_SPACING);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.text_edit_singleline(&mut self.query);

            egui::ComboBox::from_id_salt("project_status_filter")
                .selected_text(self.status.map_or("All statuses", ProjectStatus::label))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.status, None, "All statuses");
                    for status in ProjectStatus::ALL {
                        ui.selectable_value(&mut self.status, Some(status), status.label());
                    }
                });
        });

        ui.add_space(ITEM_SPACING);

        let matches = projects::filter_projects(projects::SAMPLE_PROJECTS, &self.query, self.status);
        if matches.is_empty() {
            ui.label(egui::RichText::new("No projects match the current filters.").weak());
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for project in matches {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            let name = if project.favorite {
                                format!("\u{2605} {}", project.name)
                            } else {
                                project.name.to_string()
                            };
                            ui.label(egui::RichText::new(name).strong());
                            ui.label(egui::RichText::new(project.location).weak());
                            ui.label(format!(
                                "{}, team of {}, due {}",
                                project.value, project.team, project.deadline
                            ));
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("Open").clicked() {
                                    chosen = Some(project.id);
                                }
                                ui.colored_label(
                                    Self::status_color(project.status),
                                    project.status.label(),
                                );
                                ui.label(format!("{}%", project.progress));
                            },
                        );
                    });
                });
                ui.add_space(ITEM_SPACING);
            }
        });

        chosen
    }
}
