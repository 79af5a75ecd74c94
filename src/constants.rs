//! Application-wide constants
//!
//! Storage keys, directory names and route strings used throughout the
//! shell, providing a single source of truth for constant values.

/// Configuration file locations
pub mod config {
    /// Directory under the user config dir holding all app state
    pub const APP_DIR: &str = "novologic-shell";

    /// Manager configuration file name
    pub const FILENAME: &str = "manager.toml";

    /// Subdirectory holding key-value preference records
    pub const PREFS_DIR: &str = "prefs";
}

/// Keys in the key-value preference store
pub mod storage {
    /// Serialized list of enabled sidebar module ids (JSON array)
    pub const SIDEBAR_MODULES: &str = "novologic-sidebar-modules";

    /// Selected theme name
    pub const THEME: &str = "novologic-theme";
}

/// Routes of the always-visible navigation anchors
pub mod routes {
    /// Dashboard landing page
    pub const DASHBOARD: &str = "/";

    /// Module management page
    pub const MODULES: &str = "/modules";

    /// Settings page (theme, preference reset)
    pub const SETTINGS: &str = "/settings";

    /// Project selection screen shown before the dashboard chrome
    pub const SELECT_PROJECT: &str = "/select-project";
}
