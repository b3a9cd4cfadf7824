//! Opaque key-value persistence adapter.
//!
//! The application treats durable storage as a string-to-string map with a
//! single fixed key holding the whole task list. [`SqliteStore`] is the
//! durable backend; [`MemoryStore`] is the in-memory fake used by tests.

mod sqlite;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StorageError;

pub use sqlite::SqliteStore;

/// Namespaced key under which the task list JSON array is stored.
pub const TASKS_KEY: &str = "vault-tec-tasks";

/// Key-value get/set capability the task store is written against.
pub trait KvStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile in-memory backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().expect("store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
