use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{debug_log, log};
use super::{KeyValueStore, StorageError};

/// Keeps every slot in one flat YAML mapping on disk.
pub struct FileStore {
    file_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return BTreeMap::new(),
            Err(err) => {
                log!("Failed to read {}: {}", self.file_path.display(), err);
                return BTreeMap::new();
            }
        };

        match serde_yaml_ng::from_str::<Option<BTreeMap<String, String>>>(&content) {
            Ok(values) => values.unwrap_or_default(),
            Err(err) => {
                debug_log!("Ignoring malformed store {}: {}", self.file_path.display(), err);
                BTreeMap::new()
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::LockPoisoned)?;

        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(&values)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_store_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_missing_file_reads_as_absent() {
        let store = FileStore::new(get_temp_file_path());
        assert_eq!(store.get("highScore"), None);
    }

    #[test]
    fn test_set_then_get_from_new_instance() {
        let store = FileStore::new(get_temp_file_path());
        store.set("highScore", "12").unwrap();

        let reopened = FileStore::new(store.file_path());
        assert_eq!(reopened.get("highScore").as_deref(), Some("12"));
        std::fs::remove_file(store.file_path()).ok();
    }

    #[test]
    fn test_set_keeps_other_keys() {
        let path = get_temp_file_path();
        let store = FileStore::new(path.clone());
        store.set("player", "anna").unwrap();
        store.set("highScore", "4").unwrap();

        assert_eq!(store.get("player").as_deref(), Some("anna"));
        assert_eq!(store.get("highScore").as_deref(), Some("4"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_malformed_file_reads_as_absent_and_is_replaced_on_write() {
        let path = get_temp_file_path();
        std::fs::write(&path, "- not\n- a mapping\n").unwrap();
        let store = FileStore::new(path.clone());

        assert_eq!(store.get("highScore"), None);
        store.set("highScore", "1").unwrap();
        assert_eq!(store.get("highScore").as_deref(), Some("1"));
        std::fs::remove_file(path).ok();
    }
}
