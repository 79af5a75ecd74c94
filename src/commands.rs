//! Command palette model
//!
//! Commands are rebuilt from the current sidebar composition, so modules
//! the user disabled never show up, then filtered by the palette query.

use crate::catalog;
use crate::module_prefs::ModulePrefs;
use crate::theme::Theme;

/// What a palette entry does when selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Navigate(&'static str),
    SetTheme(Theme),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub label: &'static str,
    pub group: &'static str,
    pub action: CommandAction,
}

/// All commands currently available to the palette
pub fn build_commands(prefs: &ModulePrefs) -> Vec<Command> {
    let mut commands: Vec<Command> = catalog::sidebar_items(&prefs.enabled_entries())
        .into_iter()
        .map(|entry| Command {
            label: entry.label,
            group: "Navigation",
            action: CommandAction::Navigate(entry.route),
        })
        .collect();

    commands.extend(Theme::ALL.into_iter().map(|theme| Command {
        label: theme.label(),
        group: "Theme",
        action: CommandAction::SetTheme(theme),
    }));

    commands
}

/// Case-insensitive substring filter; an empty query keeps everything
pub fn filter_commands<'a>(commands: &'a [Command], query: &str) -> Vec<&'a Command> {
    let query = query.trim().to_lowercase();
    commands
        .iter()
        .filter(|command| query.is_empty() || command.label.to_lowercase().contains(&query))
        .collect()
}
