use serde::{Deserialize, Serialize};

/// Mock operator record backing the profile view.
///
/// Everything here is static display data; none of it is derived from the
/// task store or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub station: String,
    pub user_id: String,
    pub access_level: String,
    pub join_date: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub stats: TaskStats,
}

/// Headline performance numbers shown on the profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub high_priority_tasks: u32,
    /// Percentage, 0-100.
    pub completion_rate: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Vault Dweller".to_string(),
            station: "Vault 101 - Overseer".to_string(),
            user_id: "VT-101-12345".to_string(),
            access_level: "Administrator".to_string(),
            join_date: "09/25/2077".to_string(),
            department: "Administration".to_string(),
            position: "Vault Overseer".to_string(),
            email: "overseer@vault-tec.com".to_string(),
            stats: TaskStats {
                total_tasks: 24,
                completed_tasks: 18,
                high_priority_tasks: 3,
                completion_rate: 75,
            },
        }
    }
}
