use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{Priority, Task};
use crate::storage::{KvStore, TASKS_KEY};

/// Ordered in-memory task collection with write-through persistence.
///
/// The full list is loaded once at startup and serialized back to the
/// storage adapter after every operation. Operations addressing an id that
/// is not present are silent no-ops; the boolean results only drive
/// notification wording.
pub struct TaskStore {
    storage: Box<dyn KvStore>,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load tasks from storage, seeding example tasks when no prior state
    /// exists. Malformed persisted JSON is discarded in favor of the seed
    /// rather than surfaced as a load failure.
    pub fn load(storage: Box<dyn KvStore>) -> Result<Self, StorageError> {
        let tasks = match storage.get(TASKS_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(e) => {
                    tracing::warn!("Discarding corrupt task data: {}", e);
                    seed_tasks()
                }
            },
            None => seed_tasks(),
        };

        let mut store = Self { storage, tasks };
        // Write the loaded (or seeded) state straight back so storage always
        // reflects what is in memory.
        store.persist()?;
        Ok(store)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Distinct non-empty categories in first-seen order, for the category
    /// filter menu.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for task in &self.tasks {
            if !task.category.is_empty() && !categories.contains(&task.category) {
                categories.push(task.category.clone());
            }
        }
        categories
    }

    /// Append a task to the end of the list. Does not check id collisions.
    pub fn add(&mut self, task: Task) -> Result<(), StorageError> {
        self.tasks.push(task);
        self.persist()
    }

    /// Replace the first task whose id matches. Returns whether a
    /// replacement happened.
    pub fn update(&mut self, task: Task) -> Result<bool, StorageError> {
        let replaced = match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(replaced)
    }

    /// Remove all tasks with a matching id, preserving the relative order
    /// of the remainder.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, StorageError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        self.persist()?;
        Ok(removed)
    }

    /// Flip `completed` on the matching task. Returns the new value when
    /// the task exists.
    pub fn toggle_complete(&mut self, id: Uuid) -> Result<Option<bool>, StorageError> {
        let state = self.tasks.iter_mut().find(|t| t.id == id).map(|task| {
            task.completed = !task.completed;
            task.completed
        });
        self.persist()?;
        Ok(state)
    }

    /// Flip `completed` on one subtask of one task. Returns the new value
    /// when both ids resolve.
    pub fn toggle_subtask(
        &mut self,
        task_id: Uuid,
        subtask_id: Uuid,
    ) -> Result<Option<bool>, StorageError> {
        let state = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .and_then(|task| task.subtasks.iter_mut().find(|s| s.id == subtask_id))
            .map(|subtask| {
                subtask.completed = !subtask.completed;
                subtask.completed
            });
        self.persist()?;
        Ok(state)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.tasks)?;
        self.storage.set(TASKS_KEY, &json)
    }
}

/// Example tasks shown on first launch.
fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: Uuid::new_v4(),
            title: "Sample Task 1".to_string(),
            description: "This is a sample task description.".to_string(),
            completed: false,
            due_date: "2023-12-31".to_string(),
            priority: Priority::High,
            category: "Work".to_string(),
            estimated_time: Some(120),
            subtasks: vec![],
        },
        Task {
            id: Uuid::new_v4(),
            title: "Sample Task 2".to_string(),
            description: "Another sample task description.".to_string(),
            completed: true,
            due_date: "2023-11-30".to_string(),
            priority: Priority::Medium,
            category: "Personal".to_string(),
            estimated_time: Some(60),
            subtasks: vec![],
        },
    ]
}
