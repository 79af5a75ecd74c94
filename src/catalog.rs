//! Fixed catalog of sidebar modules
//!
//! Catalog order defines canonical display order everywhere enabled
//! modules are listed. Dashboard, Modules and Settings are navigation
//! anchors outside the catalog: always visible, never toggleable.

use crate::constants::routes;

/// A navigable module of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub route: &'static str,
}

/// All optional modules, in canonical display order
pub const MODULE_CATALOG: &[ModuleEntry] = &[
    ModuleEntry { id: "projects", label: "Projects", route: "/projects" },
    ModuleEntry { id: "chat", label: "Chat", route: "/chat" },
    ModuleEntry { id: "tasks", label: "Tasks", route: "/tasks" },
    ModuleEntry { id: "reports", label: "Reports", route: "/reports" },
    ModuleEntry { id: "site-diary", label: "Site Diary", route: "/site-diary" },
    ModuleEntry { id: "budget", label: "Budget", route: "/budget" },
    ModuleEntry { id: "rfi", label: "RFI & Submittals", route: "/rfi" },
    ModuleEntry { id: "risk", label: "Risk", route: "/risk" },
    ModuleEntry { id: "invoicing", label: "Invoicing", route: "/invoicing" },
    ModuleEntry { id: "documents", label: "Documents", route: "/documents" },
];

/// Navigation anchors shown before the toggleable modules
pub const NAV_LEAD: &[ModuleEntry] = &[
    ModuleEntry { id: "dashboard", label: "Dashboard", route: routes::DASHBOARD },
    ModuleEntry { id: "modules", label: "Modules", route: routes::MODULES },
];

/// Settings is always the last navigation item
pub const NAV_SETTINGS: ModuleEntry =
    ModuleEntry { id: "settings", label: "Settings", route: routes::SETTINGS };

/// Look up a catalog entry by id
pub fn find_entry(id: &str) -> Option<&'static ModuleEntry> {
    MODULE_CATALOG.iter().find(|entry| entry.id == id)
}

/// Full sidebar navigation: anchors, then enabled modules, then Settings
pub fn sidebar_items(enabled: &[&'static ModuleEntry]) -> Vec<&'static ModuleEntry> {
    let mut items: Vec<&'static ModuleEntry> = NAV_LEAD.iter().collect();
    items.extend(enabled.iter().copied());
    items.push(&NAV_SETTINGS);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (index, entry) in MODULE_CATALOG.iter().enumerate() {
            assert!(
                MODULE_CATALOG[index + 1..].iter().all(|other| other.id != entry.id),
                "duplicate catalog id: {}",
                entry.id
            );
        }
    }

    #[test]
    fn test_anchors_do_not_shadow_catalog_ids() {
        for anchor in NAV_LEAD.iter().chain(std::iter::once(&NAV_SETTINGS)) {
            assert!(find_entry(anchor.id).is_none());
        }
    }

    #[test]
    fn test_find_entry() {
        let entry = find_entry("tasks").unwrap();
        assert_eq!(entry.label, "Tasks");
        assert_eq!(entry.route, "/tasks");

        assert!(find_entry("demolition").is_none());
    }

    #[test]
    fn test_sidebar_items_composition() {
        let budget = find_entry("budget").unwrap();
        let items = sidebar_items(&[budget]);

        let ids: Vec<&str> = items.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec!["dashboard", "modules", "budget", "settings"]);
    }

    #[test]
    fn test_sidebar_items_without_enabled_modules() {
        let items = sidebar_items(&[]);
        let ids: Vec<&str> = items.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec!["dashboard", "modules", "settings"]);
    }
}
