//! Sidebar module preferences
//!
//! Owns the set of enabled module ids and keeps it durable across
//! restarts. Losing the persisted record is always preferable to failing
//! the UI: corrupt data loads as an empty set, and a write failure leaves
//! the in-memory state authoritative for the rest of the session.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::catalog::{self, ModuleEntry};
use crate::constants::storage::SIDEBAR_MODULES;
use crate::storage::PrefStore;

type ChangeListener = Box<dyn FnMut()>;

/// Preference store for sidebar module visibility
///
/// Single logical writer per session; consumers receive derived views and
/// mutate only through [`toggle`](Self::toggle) and [`reset`](Self::reset).
pub struct ModulePrefs {
    store: Box<dyn PrefStore>,
    enabled: HashSet<String>,
    listeners: Vec<ChangeListener>,
}

impl ModulePrefs {
    /// Load the enabled set from the store, falling back to empty
    ///
    /// Malformed persisted data is treated as "no preferences configured";
    /// the next mutation overwrites it with a valid record.
    pub fn load(store: Box<dyn PrefStore>) -> Self {
        let enabled: HashSet<String> = match store.get(SIDEBAR_MODULES) {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(err) => {
                    warn!(error = %err, "Ignoring corrupt sidebar module record");
                    HashSet::new()
                }
            },
            None => HashSet::new(),
        };
        info!(enabled = enabled.len(), "Loaded sidebar module preferences");
        Self {
            store,
            enabled,
            listeners: Vec::new(),
        }
    }

    /// Flip membership of `id` and persist the new set
    ///
    /// Unknown ids are accepted: a module removed from the catalog after
    /// being enabled stays in the stored set as an inert entry instead of
    /// corrupting it.
    pub fn toggle(&mut self, id: &str) {
        if !self.enabled.remove(id) {
            self.enabled.insert(id.to_string());
        }
        self.persist();
        self.notify();
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.contains(id)
    }

    /// Enabled catalog entries in canonical catalog order
    ///
    /// Toggle order never influences the result, so the sidebar renders
    /// deterministically regardless of how the set was built up.
    pub fn enabled_entries(&self) -> Vec<&'static ModuleEntry> {
        catalog::MODULE_CATALOG
            .iter()
            .filter(|entry| self.enabled.contains(entry.id))
            .collect()
    }

    /// Number of enabled modules that resolve to a catalog entry
    pub fn enabled_count(&self) -> usize {
        self.enabled_entries().len()
    }

    /// Clear the set and delete the persisted record
    ///
    /// Deleting (rather than writing an empty list) keeps the storage
    /// footprint of an explicitly reset profile at zero.
    pub fn reset(&mut self) {
        self.enabled.clear();
        if let Err(err) = self.store.remove(SIDEBAR_MODULES) {
            warn!(error = ?err, "Failed to remove stored module preferences");
        }
        info!("Module preferences reset");
        self.notify();
    }

    /// Register a callback invoked after every completed mutation
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn persist(&mut self) {
        let mut ids: Vec<&String> = self.enabled.iter().collect();
        ids.sort();
        let payload = match serde_json::to_string(&ids) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "Failed to serialize module preferences");
                return;
            }
        };
        if let Err(err) = self.store.set(SIDEBAR_MODULES, &payload) {
            warn!(error = ?err, "Failed to persist module preferences");
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use anyhow::{anyhow, Result};
    use std::cell::Cell;
    use std::rc::Rc;

    fn prefs_with_store(store: &MemoryStore) -> ModulePrefs {
        ModulePrefs::load(Box::new(store.clone()))
    }

    #[test]
    fn test_toggle_enables_then_disables() {
        let store = MemoryStore::new();
        let mut prefs = prefs_with_store(&store);

        prefs.toggle("tasks");
        assert!(prefs.is_enabled("tasks"));

        prefs.toggle("tasks");
        assert!(!prefs.is_enabled("tasks"));
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let store = MemoryStore::new();
        let mut prefs = prefs_with_store(&store);
        prefs.toggle("budget");

        let before: Vec<&str> = prefs.enabled_entries().iter().map(|e| e.id).collect();
        prefs.toggle("risk");
        prefs.toggle("risk");
        let after: Vec<&str> = prefs.enabled_entries().iter().map(|e| e.id).collect();

        assert_eq!(before, after);
    }

    #[test]
    fn test_enabled_entries_follow_catalog_order() {
        let store = MemoryStore::new();
        let mut prefs = prefs_with_store(&store);

        // Enable in reverse catalog order
        prefs.toggle("documents");
        prefs.toggle("budget");
        prefs.toggle("projects");

        let ids: Vec<&str> = prefs.enabled_entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["projects", "budget", "documents"]);
    }

    #[test]
    fn test_unknown_id_is_accepted_but_inert() {
        let store = MemoryStore::new();
        let mut prefs = prefs_with_store(&store);

        prefs.toggle("retired-module");
        assert!(prefs.is_enabled("retired-module"));
        assert!(prefs.enabled_entries().is_empty());
        assert_eq!(prefs.enabled_count(), 0);
    }

    #[test]
    fn test_persistence_round_trip() {
        let store = MemoryStore::new();
        let mut prefs = prefs_with_store(&store);
        prefs.toggle("tasks");
        prefs.toggle("chat");

        // A fresh store instance over the same medium sees the same set
        let reloaded = prefs_with_store(&store);
        assert!(reloaded.is_enabled("tasks"));
        assert!(reloaded.is_enabled("chat"));
        assert!(!reloaded.is_enabled("budget"));
    }

    #[test]
    fn test_corrupt_record_loads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(SIDEBAR_MODULES, "{definitely not json").unwrap();

        let prefs = prefs_with_store(&store);
        assert_eq!(prefs.enabled_count(), 0);
        assert!(prefs.enabled_entries().is_empty());
    }

    #[test]
    fn test_wrong_shape_record_loads_as_empty() {
        let mut store = MemoryStore::new();
        // Valid JSON, but not a list of strings
        store.set(SIDEBAR_MODULES, r#"{"tasks": true}"#).unwrap();

        let prefs = prefs_with_store(&store);
        assert!(prefs.enabled_entries().is_empty());
    }

    #[test]
    fn test_mutation_after_corrupt_load_writes_valid_record() {
        let mut store = MemoryStore::new();
        store.set(SIDEBAR_MODULES, "][").unwrap();

        let mut prefs = prefs_with_store(&store);
        prefs.toggle("reports");

        let reloaded = prefs_with_store(&store);
        assert!(reloaded.is_enabled("reports"));
    }

    #[test]
    fn test_reset_clears_and_removes_record() {
        let store = MemoryStore::new();
        let mut prefs = prefs_with_store(&store);
        prefs.toggle("tasks");
        prefs.toggle("budget");

        prefs.reset();
        assert!(prefs.enabled_entries().is_empty());

        // The record is gone from the medium, not just emptied
        assert_eq!(store.get(SIDEBAR_MODULES), None);

        let reloaded = prefs_with_store(&store);
        assert_eq!(reloaded.enabled_count(), 0);
    }

    #[test]
    fn test_persisted_payload_is_sorted_id_list() {
        let store = MemoryStore::new();
        let mut prefs = prefs_with_store(&store);
        prefs.toggle("risk");
        prefs.toggle("budget");

        let raw = store.get(SIDEBAR_MODULES).unwrap();
        let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids, vec!["budget", "risk"]);
    }

    /// Store whose writes always fail, for availability-over-durability checks
    struct FailingStore;

    impl PrefStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("storage quota exceeded"))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(anyhow!("storage unavailable"))
        }
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let mut prefs = ModulePrefs::load(Box::new(FailingStore));

        prefs.toggle("tasks");
        assert!(prefs.is_enabled("tasks"));

        // Read-after-write within the session still observes the toggle
        let ids: Vec<&str> = prefs.enabled_entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["tasks"]);
    }

    #[test]
    fn test_reset_failure_still_clears_in_memory_state() {
        let mut prefs = ModulePrefs::load(Box::new(FailingStore));
        prefs.toggle("tasks");

        prefs.reset();
        assert!(!prefs.is_enabled("tasks"));
    }

    #[test]
    fn test_subscribers_fire_on_toggle_and_reset() {
        let store = MemoryStore::new();
        let mut prefs = prefs_with_store(&store);

        let notified = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&notified);
        prefs.subscribe(move || counter.set(counter.get() + 1));

        prefs.toggle("tasks");
        prefs.toggle("tasks");
        prefs.reset();

        assert_eq!(notified.get(), 3);
    }
}
