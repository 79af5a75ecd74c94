//! Location-derived display configuration
//!
//! Maps the current route to the context header's title, breadcrumbs,
//! primary actions and toolbar. Resolution is a pure lookup over a static
//! table; the table never changes at runtime.
//!
//! Matching rule: the route is normalized first (anything from the first
//! `?` or `#` on is dropped, trailing slashes are stripped, an emptied
//! path becomes `/`). A table key matches on equality, or as a proper
//! prefix ending at a `/` segment boundary; the root key `/` only matches
//! the root route itself. Among matching keys the longest wins, and routes
//! with no match resolve to the dashboard entry.

/// Visual weight of a primary action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Primary,
    Outline,
}

/// A primary action offered by the context header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub style: ActionStyle,
}

/// A toolbar button with its dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    pub label: &'static str,
    pub action: &'static str,
}

/// Display configuration registered under one route prefix
#[derive(Debug, PartialEq, Eq)]
pub struct ContextConfig {
    pub key: &'static str,
    pub title: &'static str,
    pub breadcrumbs: &'static [&'static str],
    pub actions: &'static [Action],
    pub toolbar: &'static [ToolbarButton],
}

/// Default configuration, also used for unknown routes
pub const DASHBOARD: ContextConfig = ContextConfig {
    key: "/",
    title: "Dashboard",
    breadcrumbs: &["Home", "Dashboard"],
    actions: &[],
    toolbar: &[],
};

const PROJECTS: ContextConfig = ContextConfig {
    key: "/projects",
    title: "Projects",
    breadcrumbs: &["Home", "Projects"],
    actions: &[
        Action { label: "New Project", style: ActionStyle::Primary },
        Action { label: "Import", style: ActionStyle::Outline },
        Action { label: "Export", style: ActionStyle::Outline },
    ],
    toolbar: &[
        ToolbarButton { label: "Filter", action: "filter" },
        ToolbarButton { label: "Sort", action: "sort" },
        ToolbarButton { label: "Grid View", action: "view-grid" },
        ToolbarButton { label: "List View", action: "view-list" },
        ToolbarButton { label: "Gantt", action: "gantt" },
    ],
};

const TASKS: ContextConfig = ContextConfig {
    key: "/tasks",
    title: "Tasks & Issues",
    breadcrumbs: &["Home", "Tasks"],
    actions: &[
        Action { label: "New Task", style: ActionStyle::Primary },
        Action { label: "Assign", style: ActionStyle::Outline },
    ],
    toolbar: &[
        ToolbarButton { label: "Filter", action: "filter" },
        ToolbarButton { label: "Kanban", action: "view-kanban" },
        ToolbarButton { label: "List", action: "view-list" },
        ToolbarButton { label: "Priority", action: "priority" },
    ],
};

const TEAM: ContextConfig = ContextConfig {
    key: "/team",
    title: "Team & Resources",
    breadcrumbs: &["Home", "Team"],
    actions: &[
        Action { label: "Add Member", style: ActionStyle::Primary },
        Action { label: "Export", style: ActionStyle::Outline },
    ],
    toolbar: &[
        ToolbarButton { label: "Filter", action: "filter" },
        ToolbarButton { label: "Grid", action: "view-grid" },
        ToolbarButton { label: "List", action: "view-list" },
    ],
};

const DOCUMENTS: ContextConfig = ContextConfig {
    key: "/documents",
    title: "Documents & Files",
    breadcrumbs: &["Home", "Documents"],
    actions: &[
        Action { label: "Upload", style: ActionStyle::Primary },
        Action { label: "New Folder", style: ActionStyle::Outline },
        Action { label: "Share", style: ActionStyle::Outline },
    ],
    toolbar: &[
        ToolbarButton { label: "Filter", action: "filter" },
        ToolbarButton { label: "Sort", action: "sort" },
        ToolbarButton { label: "Grid", action: "view-grid" },
        ToolbarButton { label: "List", action: "view-list" },
        ToolbarButton { label: "Version", action: "version" },
    ],
};

const BUDGET: ContextConfig = ContextConfig {
    key: "/budget",
    title: "Budget & Finance",
    breadcrumbs: &["Home", "Budget"],
    actions: &[
        Action { label: "New Entry", style: ActionStyle::Primary },
        Action { label: "Export", style: ActionStyle::Outline },
    ],
    toolbar: &[
        ToolbarButton { label: "Filter", action: "filter" },
        ToolbarButton { label: "Period", action: "period" },
        ToolbarButton { label: "Analytics", action: "analytics" },
    ],
};

const SCHEDULE: ContextConfig = ContextConfig {
    key: "/schedule",
    title: "Schedule & Calendar",
    breadcrumbs: &["Home", "Schedule"],
    actions: &[Action { label: "New Event", style: ActionStyle::Primary }],
    toolbar: &[
        ToolbarButton { label: "Month", action: "view-month" },
        ToolbarButton { label: "Week", action: "view-week" },
        ToolbarButton { label: "Day", action: "view-day" },
    ],
};

const GOALS: ContextConfig = ContextConfig {
    key: "/goals",
    title: "Goals & KPIs",
    breadcrumbs: &["Home", "Goals"],
    actions: &[Action { label: "New Goal", style: ActionStyle::Primary }],
    toolbar: &[
        ToolbarButton { label: "Filter", action: "filter" },
        ToolbarButton { label: "Progress", action: "progress" },
    ],
};

const SETTINGS: ContextConfig = ContextConfig {
    key: "/settings",
    title: "Settings",
    breadcrumbs: &["Home", "Settings"],
    actions: &[],
    toolbar: &[],
};

const CONTEXT_TABLE: &[&ContextConfig] = &[
    &DASHBOARD,
    &PROJECTS,
    &TASKS,
    &TEAM,
    &DOCUMENTS,
    &BUDGET,
    &SCHEDULE,
    &GOALS,
    &SETTINGS,
];

/// Resolve a route to its display configuration
///
/// Never fails: routes that match nothing get the dashboard entry.
pub fn resolve(location: &str) -> &'static ContextConfig {
    resolve_in(CONTEXT_TABLE, location).unwrap_or(&DASHBOARD)
}

fn resolve_in(
    table: &'static [&'static ContextConfig],
    location: &str,
) -> Option<&'static ContextConfig> {
    let path = normalize(location);
    table
        .iter()
        .filter(|config| matches_key(config.key, path))
        .max_by_key(|config| config.key.len())
        .copied()
}

/// Strip query/fragment and trailing slashes; an emptied path becomes `/`
fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let trimmed = location[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn matches_key(key: &str, path: &str) -> bool {
    if key == "/" {
        return path == "/";
    }
    match path.strip_prefix(key) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}
