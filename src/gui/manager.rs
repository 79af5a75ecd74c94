//! Shell window implemented with egui/eframe
//!
//! Owns the preference stores and the current route, and wires the
//! components together: sidebar and command palette navigate, the context
//! header reflects the resolved route, pages mutate preferences.

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info, warn};

use super::components::command_palette::CommandPalette;
use super::components::context_header::{self, HeaderEvent};
use super::components::project_select::ProjectSelect;
use super::components::theme_settings::{self, SettingsEvent};
use super::components::{module_settings, sidebar};
use super::constants::{
    FEATURE_PANEL_WIDTH, ITEM_SPACING, PADDING, SECTION_SPACING, SIDEBAR_WIDTH, WINDOW_MIN_HEIGHT,
    WINDOW_MIN_WIDTH,
};
use crate::commands::{self, CommandAction};
use crate::config::ManagerConfig;
use crate::constants::{routes, storage::THEME};
use crate::context;
use crate::module_prefs::ModulePrefs;
use crate::projects;
use crate::storage::{FileStore, PrefStore};
use crate::theme::{self, Theme};

struct ShellApp {
    config: ManagerConfig,
    prefs: ModulePrefs,
    theme_store: FileStore,
    theme: Theme,
    route: String,
    active_project: Option<&'static str>,
    palette: CommandPalette,
    project_select: ProjectSelect,
    feature_panel_open: bool,
}

impl ShellApp {
    fn new(cc: &CreationContext<'_>, config: ManagerConfig) -> Self {
        info!("Initializing shell window");

        let mut prefs = ModulePrefs::load(Box::new(FileStore::open_default()));

        // Repaint whenever the preference set changes so every consumer
        // (sidebar, modules page, palette) re-renders the same tick
        let repaint_ctx = cc.egui_ctx.clone();
        prefs.subscribe(move || repaint_ctx.request_repaint());

        let theme_store = FileStore::open_default();
        let theme = theme::load(&theme_store);
        cc.egui_ctx.set_visuals(theme::visuals(theme));

        Self {
            config,
            prefs,
            theme_store,
            theme,
            route: routes::SELECT_PROJECT.to_string(),
            active_project: None,
            palette: CommandPalette::new(),
            project_select: ProjectSelect::new(),
            feature_panel_open: false,
        }
    }

    fn set_theme(&mut self, ctx: &egui::Context, theme: Theme) {
        info!(theme = %theme.storage_name(), "Switching theme");
        self.theme = theme;
        theme::save(&mut self.theme_store, theme);
        ctx.set_visuals(theme::visuals(theme));
    }

    fn navigate(&mut self, route: &str) {
        if self.route != route {
            info!(route = %route, "Navigating");
            self.route = route.to_string();
            self.feature_panel_open = false;
        }
    }

    fn central_ui(&mut self, ui: &mut egui::Ui) {
        match self.route.as_str() {
            routes::MODULES => module_settings::ui(ui, &mut self.prefs),
            routes::SETTINGS => self.settings_ui(ui),
            routes::DASHBOARD => self.dashboard_ui(ui),
            _ => self.module_page_ui(ui),
        }
    }

    fn settings_ui(&mut self, ui: &mut egui::Ui) {
        if let Some(event) = theme_settings::ui(ui, self.theme) {
            match event {
                SettingsEvent::ThemeChanged(theme) => self.set_theme(ui.ctx(), theme),
                SettingsEvent::ResetPrefs => {
                    self.prefs.reset();
                    if let Err(err) = self.theme_store.remove(THEME) {
                        warn!(error = ?err, "Failed to remove stored theme");
                    }
                    self.theme = Theme::default();
                    ui.ctx().set_visuals(theme::visuals(self.theme));
                }
            }
        }
    }

    fn dashboard_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(PADDING);
        ui.heading("Welcome back");
        ui.add_space(SECTION_SPACING);

        ui.group(|ui| {
            ui.label(egui::RichText::new("Workspace").strong());
            match self.active_project.and_then(|id| projects::find_project(id)) {
                Some(project) => {
                    ui.label(format!("{} ({})", project.name, project.location));
                    ui.label(format!(
                        "{}% complete, {} on site, due {}",
                        project.progress, project.team, project.deadline
                    ));
                }
                None => {
                    ui.label("No project selected.");
                }
            }
            ui.label(format!("{} modules enabled", self.prefs.enabled_count()));
        });

        ui.add_space(SECTION_SPACING);

        ui.group(|ui| {
            ui.label(egui::RichText::new("Tips").strong());
            ui.label("\u{2022} Ctrl+K: Command palette");
            ui.label("\u{2022} Modules: Choose your sidebar");
            ui.label("\u{2022} Settings: Theme and resets");
        });
    }

    fn module_page_ui(&mut self, ui: &mut egui::Ui) {
        let resolved = context::resolve(&self.route);

        ui.add_space(PADDING);
        ui.heading(resolved.title);
        ui.label(egui::RichText::new(resolved.breadcrumbs.join(" / ")).weak());
        ui.add_space(SECTION_SPACING);
        ui.label("This module surface is not wired to project data yet.");

        if !resolved.actions.is_empty() {
            ui.add_space(ITEM_SPACING);
            ui.label(egui::RichText::new("Available actions:").strong());
            for action in resolved.actions {
                ui.label(format!("\u{2022} {}", action.label));
            }
        }
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Ctrl/Cmd+K toggles the command palette
        if ctx.input(|i| i.key_pressed(egui::Key::K) && i.modifiers.command) {
            self.palette.toggle();
        }

        // Remember window size for the next session
        let size = ctx.input(|i| i.screen_rect()).size();
        self.config.window_width = size.x;
        self.config.window_height = size.y;

        let palette_commands = commands::build_commands(&self.prefs);
        if let Some(action) = self.palette.ui(ctx, &palette_commands) {
            match action {
                CommandAction::Navigate(route) => self.navigate(route),
                CommandAction::SetTheme(theme) => self.set_theme(ctx, theme),
            }
        }

        // Project selection takes over the whole window, no chrome
        if self.route == routes::SELECT_PROJECT {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(id) = self.project_select.ui(ui) {
                    info!(project = %id, "Project selected");
                    self.active_project = Some(id);
                    self.navigate(routes::DASHBOARD);
                }
            });
            return;
        }

        let resolved = context::resolve(&self.route);

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                if let Some(route) = sidebar::ui(ui, &self.prefs, &self.route) {
                    self.navigate(route);
                }
            });

        egui::TopBottomPanel::top("context_header").show(ctx, |ui| {
            if let Some(event) = context_header::ui(ui, resolved) {
                match event {
                    HeaderEvent::Toolbar("filter") => {
                        self.feature_panel_open = !self.feature_panel_open;
                    }
                    HeaderEvent::Toolbar(action) => {
                        info!(action = %action, "Toolbar action");
                    }
                    HeaderEvent::Action(label) => {
                        info!(action = %label, "Primary action");
                    }
                }
            }
        });

        egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.small_button("Command Palette (Ctrl+K)").clicked() {
                    self.palette.toggle();
                }
                ui.separator();
                match self.active_project.and_then(|id| projects::find_project(id)) {
                    Some(project) => {
                        ui.label(format!("Project: {}", project.name));
                    }
                    None => {
                        ui.label(egui::RichText::new("No project selected").weak());
                    }
                }
                if ui.small_button("Switch project").clicked() {
                    self.navigate(routes::SELECT_PROJECT);
                }
            });
        });

        if self.feature_panel_open {
            egui::SidePanel::right("feature_panel")
                .resizable(false)
                .default_width(FEATURE_PANEL_WIDTH)
                .show(ctx, |ui| {
                    ui.label(egui::RichText::new(format!("{} tools", resolved.title)).strong());
                    ui.separator();
                    if resolved.toolbar.is_empty() {
                        ui.label(egui::RichText::new("This view has no extra tools.").weak());
                    }
                    for button in resolved.toolbar {
                        if ui.selectable_label(false, button.label).clicked() {
                            info!(action = %button.action, "Feature panel action");
                        }
                    }
                    ui.add_space(ITEM_SPACING);
                    if ui.button("Close").clicked() {
                        self.feature_panel_open = false;
                    }
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.central_ui(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = self.config.save() {
            error!(error = ?err, "Failed to save manager config during shutdown");
        }
        info!("Shell exiting");
    }
}

pub fn run_gui(config: ManagerConfig) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Novologic"),
        ..Default::default()
    };

    eframe::run_native(
        "Novologic",
        options,
        Box::new(|cc| Ok(Box::new(ShellApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("Failed to launch shell window: {err}"))
}
