use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::Session;
use crate::storage::{CONFIG_FILE, DEFAULT_STORAGE_KEY};

/// Project settings kept in `.therapy-catalog/config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Storage slot holding the user-created entries
    pub storage_key: String,
    /// Session used when the CLI acts on the catalog
    pub session: Session,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            session: Session::default(),
        }
    }
}

impl CatalogConfig {
    /// Config written by `init`: the local operator is the admin.
    pub fn for_new_project() -> Self {
        Self {
            session: Session::admin(),
            ..Self::default()
        }
    }

    /// Read the config from a data directory; a missing file yields defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&raw)?)
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(data_dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}
