use chrono::Local;
use uuid::Uuid;

use crate::models::{Priority, SubTask, Task};

/// Draft editor for creating or editing a single task.
///
/// A form exists only while open: dropping it without [`TaskForm::submit`]
/// is a cancel, and submitting consumes it, which closes the form. Field
/// changes go through [`TaskForm::set_field`] by name; unknown names and
/// values that fail to parse are ignored rather than rejected, so a draft
/// is always submittable.
#[derive(Debug, Clone)]
pub struct TaskForm {
    draft: Task,
    editing: bool,
}

impl TaskForm {
    /// Open a form for a new task: fresh id, today's date, medium priority,
    /// everything else empty.
    pub fn create() -> Self {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        Self {
            draft: Task {
                id: Uuid::new_v4(),
                title: String::new(),
                description: String::new(),
                completed: false,
                due_date: today,
                priority: Priority::Medium,
                category: String::new(),
                estimated_time: None,
                subtasks: vec![],
            },
            editing: false,
        }
    }

    /// Open a form seeded with a full copy of an existing task.
    pub fn edit(task: &Task) -> Self {
        Self {
            draft: task.clone(),
            editing: true,
        }
    }

    pub fn draft(&self) -> &Task {
        &self.draft
    }

    /// Whether submitting should update an existing task rather than add.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Set one field by its wire name. Returns whether the name was
    /// recognized.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "title" => self.draft.title = value.to_string(),
            "description" => self.draft.description = value.to_string(),
            "dueDate" => self.draft.due_date = value.to_string(),
            "category" => self.draft.category = value.to_string(),
            "priority" => {
                if let Some(priority) = Priority::from_str(value) {
                    self.draft.priority = priority;
                }
            }
            "estimatedTime" => {
                self.draft.estimated_time = value.trim().parse().ok();
            }
            "completed" => {
                if let Ok(completed) = value.parse() {
                    self.draft.completed = completed;
                }
            }
            _ => return false,
        }
        true
    }

    /// Append a subtask with a fresh id. Empty and whitespace-only titles
    /// are rejected.
    pub fn add_subtask(&mut self, title: &str) -> bool {
        if title.trim().is_empty() {
            return false;
        }

        self.draft.subtasks.push(SubTask {
            id: Uuid::new_v4(),
            title: title.to_string(),
            completed: false,
        });
        true
    }

    /// Remove a subtask by id.
    pub fn remove_subtask(&mut self, id: Uuid) -> bool {
        let before = self.draft.subtasks.len();
        self.draft.subtasks.retain(|s| s.id != id);
        self.draft.subtasks.len() != before
    }

    /// Close the form, yielding the finished draft for the save path.
    pub fn submit(self) -> Task {
        self.draft
    }
}
