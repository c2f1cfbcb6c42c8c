use std::collections::HashMap;
use std::sync::Mutex;

use super::StorageError;

/// String key-value slots that survive past a single game.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Absent and unreadable values are both `None`.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store, mainly for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::LockPoisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_missing_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("highScore"), None);
    }

    #[test]
    fn test_memory_store_set_overwrites() {
        let store = MemoryStore::with_value("highScore", "3");
        store.set("highScore", "7").unwrap();
        assert_eq!(store.get("highScore").as_deref(), Some("7"));
    }
}
