use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::KeyValueStore;
use crate::error::{CatalogError, Result};

pub const DATA_DIR: &str = ".therapy-catalog";
pub const STORAGE_FILE: &str = "storage.json";
pub const CONFIG_FILE: &str = "config.yaml";
pub const BACKUP_FILE: &str = "storage.json.bak";

/// Key-value slots kept in a single JSON object file under the project's
/// data directory.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Initialize a new project at `root`
    pub fn init(root: &Path) -> Result<Self> {
        let data_dir = root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(CatalogError::AlreadyInitialized);
        }

        fs::create_dir_all(&data_dir)?;

        let store = Self {
            path: data_dir.join(STORAGE_FILE),
        };
        store.write_slots(&BTreeMap::new())?;

        Ok(store)
    }

    /// Open an existing project
    pub fn open(root: &Path) -> Result<Self> {
        let data_dir = root.join(DATA_DIR);

        if !data_dir.is_dir() {
            return Err(CatalogError::NotInitialized);
        }

        Ok(Self {
            path: data_dir.join(STORAGE_FILE),
        })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    fn read_slots(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&raw)?)
    }

    /// Move an unparseable storage file aside so a write can start fresh
    /// without losing what was there.
    fn set_aside_corrupt_file(&self) -> Result<()> {
        let backup = self.data_dir().join(BACKUP_FILE);
        fs::rename(&self.path, &backup)?;
        warn!(
            path = %self.path.display(),
            backup = %backup.display(),
            "storage file was not valid JSON; moved aside"
        );
        Ok(())
    }

    fn write_slots(&self, slots: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(slots)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut slots = self.read_slots()?;
        Ok(slots.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let mut slots = match self.read_slots() {
            Ok(slots) => slots,
            Err(CatalogError::Json(_)) => {
                self.set_aside_corrupt_file()?;
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        slots.insert(key.to_string(), value);
        self.write_slots(&slots)?;
        debug!(path = %self.path.display(), key, "wrote storage slot");
        Ok(())
    }
}
