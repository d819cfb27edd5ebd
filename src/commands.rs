//! Commands exposed to the host's command registry
//!
//! The registration facility itself belongs to the host; the plugin only
//! describes which commands exist and dispatches them by id.

use crate::settings::Settings;

/// Toggle the always-on-top flag of the focused window.
pub const TOGGLE_WINDOW_PIN: &str = "toggle-window-pin";
/// Open a duplicate-content pop-out, keeping the main window focused.
pub const OPEN_PINNED_POPOUT: &str = "open-pinned-popout";
/// Open a duplicate-content pop-out, forcing the main window to background.
pub const OPEN_PINNED_POPOUT_EXCLUSIVE: &str = "open-pinned-popout-exclusive";

/// Descriptor the host feeds into its command registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: String,
    pub name: String,
}

impl CommandSpec {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Every command the host should register for the current settings: the
/// three built-ins plus the enabled custom commands.
pub fn command_specs(settings: &Settings) -> Vec<CommandSpec> {
    let mut specs = vec![
        CommandSpec::new(TOGGLE_WINDOW_PIN, "Toggle window pin"),
        CommandSpec::new(OPEN_PINNED_POPOUT, "Open pinned pop-out window"),
        CommandSpec::new(
            OPEN_PINNED_POPOUT_EXCLUSIVE,
            "Open pinned pop-out window (keep main window in background)",
        ),
    ];
    for command in settings.enabled_commands() {
        specs.push(CommandSpec {
            id: command.id.clone(),
            name: command.display_name(),
        });
    }
    specs
}
