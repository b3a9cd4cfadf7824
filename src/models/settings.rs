use serde::{Deserialize, Serialize};

use super::task::Priority;

/// User preferences backing the settings view.
///
/// The settings form is display-only: saving emits a confirmation but the
/// values are not persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub username: String,
    pub email: String,
    pub default_view: DefaultView,
    pub default_priority: Priority,
    /// Notify about upcoming tasks.
    pub task_reminders: bool,
    /// Send a weekly task summary.
    pub weekly_summary: bool,
    /// Announce maintenance and updates.
    pub system_updates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            username: "Vault_Dweller".to_string(),
            email: "overseer@vault-tec.com".to_string(),
            default_view: DefaultView::Tasks,
            default_priority: Priority::Medium,
            task_reminders: true,
            weekly_summary: true,
            system_updates: false,
        }
    }
}

/// Which view opens on launch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DefaultView {
    Tasks,
    Calendar,
}

impl DefaultView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Calendar => "calendar",
        }
    }
}
