use serde::{Deserialize, Serialize};

use crate::models::{Priority, Task};

/// Predicate over the completion flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Sort key for the displayed list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    DueDate,
    Priority,
    Title,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DueDate => "due_date",
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "due_date" | "due-date" | "due" => Some(Self::DueDate),
            "priority" => Some(Self::Priority),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

/// Filter predicates and sort key that derive the displayed list.
///
/// All predicates must pass (status AND category AND priority), then the
/// survivors are sorted. The sort is stable, so ties keep their original
/// relative order.
#[derive(Debug, Clone)]
pub struct TaskQuery {
    pub status: StatusFilter,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub sort: SortKey,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            category: None,
            priority: None,
            sort: SortKey::DueDate,
        }
    }
}

impl TaskQuery {
    /// Derive the display list. The input is not mutated.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let mut result: Vec<Task> = tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect();

        match self.sort {
            SortKey::DueDate => {
                // Ascending by parsed date; unparseable dates go last.
                result.sort_by_key(|t| match t.due() {
                    Some(date) => (false, date),
                    None => (true, chrono::NaiveDate::MAX),
                });
            }
            SortKey::Priority => {
                result.sort_by_key(|t| t.priority.rank());
            }
            SortKey::Title => {
                result.sort_by_key(|t| t.title.to_lowercase());
            }
        }

        result
    }

    fn matches(&self, task: &Task) -> bool {
        match self.status {
            StatusFilter::Active if task.completed => return false,
            StatusFilter::Completed if !task.completed => return false,
            _ => {}
        }

        if let Some(category) = &self.category {
            if task.category != *category {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }

        true
    }
}
