//! Key-value preference storage
//!
//! User preferences (enabled sidebar modules, theme) are persisted through
//! a small key-value port so consumers stay independent of the concrete
//! backend and tests can swap in an in-memory fake. The production store
//! writes one file per key under the user config directory.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

/// Storage port for preference records
///
/// `get` returns None for missing keys and `remove` on a missing key is not
/// an error. Writers treat `set` failures as best-effort: durability limits
/// of the backing medium never block the UI action that triggered a write.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed store, one file per key
///
/// Note: separate processes pointed at the same directory are not
/// synchronized; the last writer wins.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at the default preference directory
    pub fn open_default() -> Self {
        let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push(crate::constants::config::APP_DIR);
        dir.push(crate::constants::config::PREFS_DIR);
        Self { dir }
    }

    pub fn open_at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl PrefStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).context(format!(
            "Failed to create preference directory: {}",
            self.dir.display()
        ))?;
        let path = self.key_path(key);
        fs::write(&path, value)
            .context(format!("Failed to write preference file: {}", path.display()))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).context(format!(
                "Failed to remove preference file: {}",
                path.display()
            )),
        }
    }
}

/// In-memory store with shared backing
///
/// Clones share one map, so a test can hand a clone to a consumer and later
/// inspect, corrupt or re-read the stored values through another clone.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open_at(dir.path().to_path_buf());

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark".to_string()));

        // Overwrite replaces the previous value
        store.set("theme", "blueprint").unwrap();
        assert_eq!(store.get("theme"), Some("blueprint".to_string()));
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open_at(dir.path().to_path_buf());
        assert_eq!(store.get("nothing-here"), None);
    }

    #[test]
    fn test_file_store_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open_at(dir.path().to_path_buf());

        store.set("key", "value").unwrap();
        store.remove("key").unwrap();
        assert_eq!(store.get("key"), None);

        // Removing an absent key is not an error
        store.remove("key").unwrap();
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open_at(dir.path().to_path_buf());
        store.set("key", "value").unwrap();

        let reopened = FileStore::open_at(dir.path().to_path_buf());
        assert_eq!(reopened.get("key"), Some("value".to_string()));
    }

    #[test]
    fn test_memory_store_clones_share_backing() {
        let mut store = MemoryStore::new();
        let observer = store.clone();

        store.set("key", "value").unwrap();
        assert_eq!(observer.get("key"), Some("value".to_string()));

        store.remove("key").unwrap();
        assert_eq!(observer.get("key"), None);
    }
}
