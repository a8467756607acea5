mod catalog_store;
mod file_store;

pub use catalog_store::{CatalogStore, RejectedRecord, StoredOverlay, DEFAULT_STORAGE_KEY};
pub use file_store::{FileStore, BACKUP_FILE, CONFIG_FILE, DATA_DIR, STORAGE_FILE};

use std::collections::HashMap;

use crate::error::Result;

/// A flat string-to-string slot store, the shape of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// Volatile store used by tests and embedders.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.slots.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1".to_string()).unwrap();
        store.set("k", "v2".to_string()).unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));
    }
}
