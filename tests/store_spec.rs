use speculate2::speculate;
use uuid::Uuid;
use vault_tasks::models::{Priority, SubTask, Task};
use vault_tasks::storage::{KvStore, SqliteStore, TASKS_KEY};
use vault_tasks::store::TaskStore;

fn make_task(title: &str, due: &str, priority: Priority) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        completed: false,
        due_date: due.to_string(),
        priority,
        category: String::new(),
        estimated_time: None,
        subtasks: vec![],
    }
}

/// Load a store over `backing` with an explicitly empty task list, so the
/// first-launch seed does not interfere with the test.
fn empty_store(backing: &SqliteStore) -> TaskStore {
    backing
        .set(TASKS_KEY, "[]")
        .expect("Failed to clear storage");
    TaskStore::load(Box::new(backing.clone())).expect("Failed to load")
}

speculate! {
    before {
        let backing = SqliteStore::open_memory().expect("Failed to open in-memory storage");
        backing.migrate().expect("Failed to run migrations");
    }

    describe "loading" {
        it "seeds two example tasks when no prior state exists" {
            let store = TaskStore::load(Box::new(backing)).expect("Failed to load");

            assert_eq!(store.tasks().len(), 2);
            assert_eq!(store.tasks()[0].title, "Sample Task 1");
            assert_eq!(store.tasks()[1].title, "Sample Task 2");
        }

        it "persists the seed immediately" {
            TaskStore::load(Box::new(backing.clone())).expect("Failed to load");

            let raw = backing.get(TASKS_KEY).expect("Query failed").expect("Nothing persisted");
            assert!(raw.contains("Sample Task 1"));
        }

        it "fails closed to the seed on corrupt persisted data" {
            backing.set(TASKS_KEY, "{definitely not json").expect("Failed to write");

            let mut store = TaskStore::load(Box::new(backing.clone())).expect("Failed to load");

            assert_eq!(store.tasks().len(), 2);

            // The store stays usable after recovery
            store.add(make_task("After recovery", "2024-01-01", Priority::Low)).expect("Add failed");
            assert_eq!(store.tasks().len(), 3);
        }

        it "loads the persisted list as-is" {
            let task = make_task("Persisted", "2024-06-01", Priority::High);
            let json = serde_json::to_string(&vec![task.clone()]).unwrap();
            backing.set(TASKS_KEY, &json).expect("Failed to write");

            let store = TaskStore::load(Box::new(backing)).expect("Failed to load");

            assert_eq!(store.tasks().len(), 1);
            assert_eq!(store.tasks()[0].id, task.id);
        }
    }

    describe "add" {
        it "round-trips a task through persistence with identical fields" {
            let mut store = empty_store(&backing);
            let mut task = make_task("Reactor inspection", "2023-12-31", Priority::High);
            task.description = "Check the coolant loop.".to_string();
            task.category = "Work".to_string();
            task.estimated_time = Some(120);
            task.subtasks = vec![SubTask {
                id: Uuid::new_v4(),
                title: "Check water filter".to_string(),
                completed: false,
            }];

            store.add(task.clone()).expect("Add failed");

            let reloaded = TaskStore::load(Box::new(backing)).expect("Failed to reload");
            let found = reloaded.get(task.id).expect("Task not found after reload");

            assert_eq!(found.title, task.title);
            assert_eq!(found.description, task.description);
            assert_eq!(found.completed, task.completed);
            assert_eq!(found.due_date, task.due_date);
            assert_eq!(found.priority, task.priority);
            assert_eq!(found.category, task.category);
            assert_eq!(found.estimated_time, task.estimated_time);
            assert_eq!(found.subtasks.len(), 1);
            assert_eq!(found.subtasks[0].id, task.subtasks[0].id);
            assert_eq!(found.subtasks[0].title, "Check water filter");
        }

        it "appends to the end of the list" {
            let mut store = empty_store(&backing);

            store.add(make_task("First", "2024-01-01", Priority::Low)).expect("Add failed");
            store.add(make_task("Second", "2024-01-02", Priority::Low)).expect("Add failed");

            assert_eq!(store.tasks()[0].title, "First");
            assert_eq!(store.tasks()[1].title, "Second");
        }
    }

    describe "update" {
        it "replaces exactly the matching task and leaves others unchanged" {
            let mut store = empty_store(&backing);
            let first = make_task("First", "2024-01-01", Priority::Low);
            let second = make_task("Second", "2024-01-02", Priority::Medium);
            store.add(first.clone()).expect("Add failed");
            store.add(second.clone()).expect("Add failed");

            let mut changed = second.clone();
            changed.title = "Second, revised".to_string();
            changed.priority = Priority::High;

            let replaced = store.update(changed).expect("Update failed");
            assert!(replaced);

            assert_eq!(store.tasks()[0].title, "First");
            assert_eq!(store.tasks()[0].priority, Priority::Low);
            assert_eq!(store.tasks()[1].title, "Second, revised");
            assert_eq!(store.tasks()[1].priority, Priority::High);
        }

        it "is a no-op for an unknown id" {
            let mut store = empty_store(&backing);
            store.add(make_task("Only", "2024-01-01", Priority::Low)).expect("Add failed");

            let replaced = store.update(make_task("Ghost", "2024-01-01", Priority::Low)).expect("Update failed");

            assert!(!replaced);
            assert_eq!(store.tasks().len(), 1);
            assert_eq!(store.tasks()[0].title, "Only");
        }
    }

    describe "delete" {
        it "removes the matching task and preserves the order of the rest" {
            let mut store = empty_store(&backing);
            let a = make_task("A", "2024-01-01", Priority::Low);
            let b = make_task("B", "2024-01-02", Priority::Low);
            let c = make_task("C", "2024-01-03", Priority::Low);
            store.add(a).expect("Add failed");
            store.add(b.clone()).expect("Add failed");
            store.add(c).expect("Add failed");

            let removed = store.delete(b.id).expect("Delete failed");

            assert!(removed);
            let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
            assert_eq!(titles, vec!["A", "C"]);
        }

        it "is a no-op for an unknown id" {
            let mut store = empty_store(&backing);
            store.add(make_task("Only", "2024-01-01", Priority::Low)).expect("Add failed");

            let removed = store.delete(Uuid::new_v4()).expect("Delete failed");

            assert!(!removed);
            assert_eq!(store.tasks().len(), 1);
        }
    }

    describe "toggle_complete" {
        it "flips completed exactly once per call" {
            let mut store = empty_store(&backing);
            let task = make_task("Flip me", "2024-01-01", Priority::Low);
            store.add(task.clone()).expect("Add failed");

            assert_eq!(store.toggle_complete(task.id).expect("Toggle failed"), Some(true));
            assert!(store.get(task.id).unwrap().completed);

            // A second toggle restores the original value
            assert_eq!(store.toggle_complete(task.id).expect("Toggle failed"), Some(false));
            assert!(!store.get(task.id).unwrap().completed);
        }

        it "is a no-op for an unknown id" {
            let mut store = empty_store(&backing);

            let state = store.toggle_complete(Uuid::new_v4()).expect("Toggle failed");

            assert_eq!(state, None);
        }
    }

    describe "toggle_subtask" {
        it "flips exactly the addressed subtask" {
            let mut store = empty_store(&backing);
            let mut task = make_task("Parent", "2024-01-01", Priority::Low);
            let first = SubTask { id: Uuid::new_v4(), title: "First".to_string(), completed: false };
            let second = SubTask { id: Uuid::new_v4(), title: "Second".to_string(), completed: false };
            task.subtasks = vec![first.clone(), second.clone()];
            store.add(task.clone()).expect("Add failed");

            let state = store.toggle_subtask(task.id, second.id).expect("Toggle failed");

            assert_eq!(state, Some(true));
            let found = store.get(task.id).unwrap();
            assert!(!found.subtasks[0].completed);
            assert!(found.subtasks[1].completed);
        }

        it "is a no-op when the subtask does not exist" {
            let mut store = empty_store(&backing);
            let task = make_task("Parent", "2024-01-01", Priority::Low);
            store.add(task.clone()).expect("Add failed");

            let state = store.toggle_subtask(task.id, Uuid::new_v4()).expect("Toggle failed");

            assert_eq!(state, None);
        }
    }

    describe "categories" {
        it "returns distinct non-empty categories in first-seen order" {
            let mut store = empty_store(&backing);
            let mut a = make_task("A", "2024-01-01", Priority::Low);
            a.category = "Work".to_string();
            let b = make_task("B", "2024-01-02", Priority::Low);
            let mut c = make_task("C", "2024-01-03", Priority::Low);
            c.category = "Personal".to_string();
            let mut d = make_task("D", "2024-01-04", Priority::Low);
            d.category = "Work".to_string();
            store.add(a).expect("Add failed");
            store.add(b).expect("Add failed");
            store.add(c).expect("Add failed");
            store.add(d).expect("Add failed");

            assert_eq!(store.categories(), vec!["Work", "Personal"]);
        }
    }

    describe "on_disk" {
        it "round-trips through a reopened database file" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("tasks.db");

            let task = make_task("Durable", "2024-03-01", Priority::Medium);
            {
                let storage = SqliteStore::open(path.clone()).expect("Failed to open");
                storage.migrate().expect("Failed to migrate");

                let mut store = empty_store(&storage);
                store.add(task.clone()).expect("Add failed");
            }

            let storage = SqliteStore::open(path).expect("Failed to reopen");
            storage.migrate().expect("Failed to migrate");
            let store = TaskStore::load(Box::new(storage)).expect("Failed to reload");

            assert_eq!(store.tasks().len(), 1);
            assert_eq!(store.tasks()[0].id, task.id);
            assert_eq!(store.tasks()[0].title, "Durable");
        }
    }
}
