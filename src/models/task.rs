use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A user-defined to-do item with scheduling and priority metadata.
///
/// Tasks are the only persisted entity. The whole collection is serialized
/// as a single JSON array (camelCase field names) and written through to
/// storage after every mutation, so the struct doubles as the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// Calendar-date string (`YYYY-MM-DD`). Kept as a string for storage;
    /// the view layers parse it.
    pub due_date: String,
    pub priority: Priority,
    /// Free-form grouping label. Empty means uncategorized.
    #[serde(default)]
    pub category: String,
    /// Estimated effort in minutes. Older snapshots stored this as either a
    /// number or a string, so deserialization accepts both.
    #[serde(
        default,
        deserialize_with = "de_estimated_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_time: Option<u32>,
    #[serde(default)]
    pub subtasks: Vec<SubTask>,
}

impl Task {
    /// Parse the due date, if it is a well-formed calendar date.
    pub fn due(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()
    }
}

/// A minor checklist item owned by a [`Task`].
///
/// Subtasks have no due date or priority of their own and are created and
/// destroyed as part of task edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTask {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Task priority, ranked `High > Medium > Low` for sorting and calendar
/// flagging.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Sort rank: high first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// Accepts a number, a numeric string, an empty string, or null.
fn de_estimated_time<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Num(n)) if n >= 0.0 => Some(n as u32),
        Some(Raw::Num(_)) => None,
        Some(Raw::Text(s)) => s.trim().parse().ok(),
    })
}
