//! Settings management for pintop
//!
//! The host persists the settings record as a flat JSON document and hands it
//! back on load; the plugin itself owns no config file. Missing fields fall
//! back to defaults so records written by older versions keep loading.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PinTopError, PinTopResult};
use crate::host::{WindowClass, Workspace};
use crate::utils::has_invalid_file_name_characters;

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Indicator appearance and visibility for the main window
    pub main_indicator: IndicatorConfig,
    /// Indicator appearance and visibility for pop-out windows
    pub popout_indicator: IndicatorConfig,
    /// Master switch for user-defined pop-out commands
    pub use_custom_commands: bool,
    /// User-defined pop-out commands
    pub custom_commands: Vec<CustomCommand>,
    /// Format applied to the `{{date}}` placeholder in filename rules
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            main_indicator: IndicatorConfig {
                show: false,
                ..IndicatorConfig::default()
            },
            popout_indicator: IndicatorConfig::default(),
            use_custom_commands: false,
            custom_commands: Vec::new(),
            date_format: "YYYY-MM-DD".to_string(),
        }
    }
}

impl Settings {
    /// Deserialize the settings record handed over by the host, merging
    /// defaults for anything the stored record does not carry.
    pub fn from_value(value: serde_json::Value) -> PinTopResult<Self> {
        serde_json::from_value(value).map_err(PinTopError::from)
    }

    /// Serialize the settings record for the host to persist.
    pub fn to_value(&self) -> PinTopResult<serde_json::Value> {
        serde_json::to_value(self).map_err(PinTopError::from)
    }

    /// Indicator configuration for a window class.
    pub fn indicator_config(&self, class: WindowClass) -> &IndicatorConfig {
        match class {
            WindowClass::Main => &self.main_indicator,
            WindowClass::Popout => &self.popout_indicator,
        }
    }

    /// Look up a custom command by its identifier.
    pub fn command_by_id(&self, id: &str) -> Option<&CustomCommand> {
        self.custom_commands.iter().find(|cmd| cmd.id == id)
    }

    /// Custom commands the host should expose, honoring the master switch.
    pub fn enabled_commands(&self) -> impl Iterator<Item = &CustomCommand> {
        let use_custom = self.use_custom_commands;
        self.custom_commands
            .iter()
            .filter(move |cmd| use_custom && cmd.enabled)
    }
}

/// Per-window-class indicator configuration
///
/// The indicator code is parameterized on this struct alone; main and pop-out
/// windows carry one record each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndicatorConfig {
    /// Whether indicators are shown for this window class at all
    pub show: bool,
    /// Distance from the top edge of the window, in pixels
    pub offset_top: u32,
    /// Distance from the right edge of the window, in pixels
    pub offset_right: u32,
    /// Width and height of the indicator box, in pixels
    pub size: u32,
    /// Size of the icon inside the indicator, in pixels
    pub icon_size: u32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            show: true,
            offset_top: 80,
            offset_right: 12,
            size: 30,
            icon_size: 15,
        }
    }
}

/// A user-configured pop-out launch command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCommand {
    /// Stable identifier, also used in deep links
    pub id: String,
    /// Display name; empty means "derive one from the action"
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub action: CommandAction,
}

impl CustomCommand {
    /// Name shown in the host's command list, derived from the action when
    /// the user left the name empty.
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        match &self.action {
            CommandAction::Blank {} => "Open blank pinned pop-out".to_string(),
            CommandAction::File { file_path } => {
                format!(
                    "Open {} in pinned pop-out",
                    crate::utils::file_name_of_path(file_path)
                )
            }
            CommandAction::Folder { folder_path, .. } => {
                format!(
                    "Create note in {} and open in pinned pop-out",
                    crate::utils::folder_name_of_path(folder_path)
                )
            }
            CommandAction::Journal { journal_period } => {
                format!("Open {journal_period} journal note in pinned pop-out")
            }
        }
    }

    /// Validate the command configuration against the workspace.
    ///
    /// Called by the settings surface before a command may be enabled; a
    /// command that fails validation stays disabled.
    pub fn validate(&self, workspace: &dyn Workspace) -> PinTopResult<()> {
        match &self.action {
            CommandAction::Blank {} => Ok(()),
            CommandAction::File { file_path } => {
                if file_path.is_empty() {
                    return Err(PinTopError::InvalidCommand(
                        "file path is empty".to_string(),
                    ));
                }
                if !workspace.file_exists(file_path) {
                    return Err(PinTopError::InvalidCommand(format!(
                        "file does not exist: {file_path}"
                    )));
                }
                Ok(())
            }
            CommandAction::Folder {
                folder_path,
                file_name_rule,
                template_path,
            } => {
                // An empty folder path addresses the vault root and is valid.
                if !folder_path.is_empty() && !workspace.folder_exists(folder_path) {
                    return Err(PinTopError::InvalidCommand(format!(
                        "folder does not exist: {folder_path}"
                    )));
                }
                if file_name_rule.is_empty() {
                    return Err(PinTopError::InvalidCommand(
                        "file name rule is empty".to_string(),
                    ));
                }
                if has_invalid_file_name_characters(file_name_rule) {
                    return Err(PinTopError::InvalidCommand(format!(
                        "file name rule contains invalid characters: {file_name_rule}"
                    )));
                }
                if let Some(template) = template_path {
                    if !template.is_empty() && !workspace.file_exists(template) {
                        return Err(PinTopError::InvalidCommand(format!(
                            "template does not exist: {template}"
                        )));
                    }
                }
                Ok(())
            }
            CommandAction::Journal { journal_period } => {
                if !workspace.available_journal_periods().contains(journal_period) {
                    return Err(PinTopError::InvalidCommand(format!(
                        "the {journal_period} journal period is not available"
                    )));
                }
                Ok(())
            }
        }
    }
}

/// What a custom command loads into the pop-out it launches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "camelCase")]
pub enum CommandAction {
    /// Open an empty pop-out window
    Blank {},
    /// Open a specific file
    #[serde(rename_all = "camelCase")]
    File {
        #[serde(default)]
        file_path: String,
    },
    /// Create a note in a folder from a filename rule, then open it
    #[serde(rename_all = "camelCase")]
    Folder {
        #[serde(default)]
        folder_path: String,
        #[serde(default)]
        file_name_rule: String,
        #[serde(default)]
        template_path: Option<String>,
    },
    /// Create or open the periodic note of the configured granularity
    #[serde(rename_all = "camelCase")]
    Journal {
        #[serde(default)]
        journal_period: JournalPeriod,
    },
}

/// Granularity of a periodic/journal note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl JournalPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            JournalPeriod::Daily => "daily",
            JournalPeriod::Weekly => "weekly",
            JournalPeriod::Monthly => "monthly",
            JournalPeriod::Quarterly => "quarterly",
            JournalPeriod::Yearly => "yearly",
        }
    }
}

impl fmt::Display for JournalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
