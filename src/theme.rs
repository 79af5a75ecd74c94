//! Theme selection
//!
//! Three visual themes persisted through the same key-value store as the
//! module preferences. Unknown or missing stored values fall back to the
//! default so a stale record can never block startup.

use egui::Color32;
use tracing::warn;

use crate::constants::storage::THEME;
use crate::storage::PrefStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Blueprint,
    Dark,
    Construction,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Blueprint, Theme::Dark, Theme::Construction];

    /// Name used in the persisted record
    pub fn storage_name(self) -> &'static str {
        match self {
            Theme::Blueprint => "blueprint",
            Theme::Dark => "dark",
            Theme::Construction => "construction",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Blueprint => "Blueprint",
            Theme::Dark => "Z-Black Dark",
            Theme::Construction => "Construction",
        }
    }

    fn from_storage_name(name: &str) -> Option<Theme> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.storage_name() == name)
    }
}

/// Load the stored theme, falling back to the default
pub fn load(store: &dyn PrefStore) -> Theme {
    match store.get(THEME) {
        Some(name) => Theme::from_storage_name(name.trim()).unwrap_or_else(|| {
            warn!(stored = %name, "Unknown stored theme, using default");
            Theme::default()
        }),
        None => Theme::default(),
    }
}

/// Persist the selected theme (best-effort)
pub fn save(store: &mut dyn PrefStore, theme: Theme) {
    if let Err(err) = store.set(THEME, theme.storage_name()) {
        warn!(error = ?err, "Failed to persist theme selection");
    }
}

/// egui visual style for a theme
pub fn visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Blueprint => {
            let mut visuals = egui::Visuals::light();
            visuals.panel_fill = Color32::from_rgb(0xF4, 0xF7, 0xFB);
            visuals.window_fill = Color32::from_rgb(0xF4, 0xF7, 0xFB);
            visuals.hyperlink_color = Color32::from_rgb(0x0F, 0x4C, 0x81);
            visuals.selection.bg_fill = Color32::from_rgb(0x0F, 0x4C, 0x81);
            visuals
        }
        Theme::Dark => egui::Visuals::dark(),
        Theme::Construction => {
            let mut visuals = egui::Visuals::light();
            visuals.panel_fill = Color32::from_rgb(0xFB, 0xF6, 0xEF);
            visuals.window_fill = Color32::from_rgb(0xFB, 0xF6, 0xEF);
            visuals.hyperlink_color = Color32::from_rgb(0xC2, 0x5E, 0x1C);
            visuals.selection.bg_fill = Color32::from_rgb(0xE8, 0x76, 0x2C);
            visuals
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_when_nothing_stored() {
        let store = MemoryStore::new();
        assert_eq!(load(&store), Theme::Blueprint);
    }

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        save(&mut store, Theme::Construction);
        assert_eq!(load(&store), Theme::Construction);
    }

    #[test]
    fn test_unknown_stored_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(THEME, "solarized").unwrap();
        assert_eq!(load(&store), Theme::Blueprint);
    }

    #[test]
    fn test_stored_value_is_trimmed() {
        let mut store = MemoryStore::new();
        store.set(THEME, "dark\n").unwrap();
        assert_eq!(load(&store), Theme::Dark);
    }

    #[test]
    fn test_storage_names_are_stable() {
        // These names live in user preference files; renaming them would
        // silently reset existing installs to the default theme.
        assert_eq!(Theme::Blueprint.storage_name(), "blueprint");
        assert_eq!(Theme::Dark.storage_name(), "dark");
        assert_eq!(Theme::Construction.storage_name(), "construction");
    }
}
