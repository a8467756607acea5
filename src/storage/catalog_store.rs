use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::KeyValueStore;
use crate::entity::{is_custom_id, seed_entries, CatalogEntry};
use crate::error::Result;

/// Slot name the overlay has always been stored under.
pub const DEFAULT_STORAGE_KEY: &str = "mindcare_admin_therapy_modules";

/// A stored record that could not be read back as an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub id: String,
    pub reason: String,
    raw: Value,
}

/// The overlay slot split into usable entries and records left untouched.
#[derive(Debug, Default)]
pub struct StoredOverlay {
    pub entries: Vec<CatalogEntry>,
    pub rejected: Vec<RejectedRecord>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum OverlayRecord<'a> {
    Entry(&'a CatalogEntry),
    Raw(&'a Value),
}

/// Loads and saves the catalog: the built-in seed set plus the user-created
/// overlay kept in a single key-value slot.
pub struct CatalogStore<S> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> CatalogStore<S> {
    pub fn new(kv: S) -> Self {
        Self::with_key(kv, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Seed entries followed by the stored overlay. A missing, unreadable or
    /// malformed overlay yields the seed entries alone; a single bad record
    /// is skipped and the rest still load.
    pub fn load(&self) -> Vec<CatalogEntry> {
        let mut entries = seed_entries();

        match self.stored_overlay() {
            Ok(stored) => {
                debug!(
                    key = %self.key,
                    count = stored.entries.len(),
                    rejected = stored.rejected.len(),
                    "loaded overlay"
                );
                entries.extend(stored.entries);
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring unreadable overlay");
            }
        }

        entries
    }

    /// The usable overlay entries as stored, without the seed set.
    pub fn overlay(&self) -> Result<Vec<CatalogEntry>> {
        Ok(self.stored_overlay()?.entries)
    }

    /// Read the overlay record by record. Records that fail to parse, or
    /// that carry no sessions, are set aside instead of failing the slot.
    pub fn stored_overlay(&self) -> Result<StoredOverlay> {
        let raw = match self.kv.get(&self.key)? {
            Some(raw) => raw,
            None => return Ok(StoredOverlay::default()),
        };
        let records: Vec<Value> = serde_json::from_str(&raw)?;

        let mut stored = StoredOverlay::default();
        for record in records {
            match parse_record(&record) {
                Ok(entry) => stored.entries.push(entry),
                Err(reason) => {
                    let id = record_id(&record);
                    warn!(key = %self.key, id = %id, reason = %reason, "skipping stored entry");
                    stored.rejected.push(RejectedRecord {
                        id,
                        reason,
                        raw: record,
                    });
                }
            }
        }

        Ok(stored)
    }

    /// Persist the user-created part of `entries`, replacing the previous
    /// overlay. Stored records that could not be read are carried over as-is.
    pub fn save(&mut self, entries: &[CatalogEntry]) -> Result<()> {
        let rejected = match self.stored_overlay() {
            Ok(stored) => stored.rejected,
            Err(e) => {
                warn!(key = %self.key, error = %e, "replacing unreadable overlay");
                Vec::new()
            }
        };

        let mut overlay: Vec<OverlayRecord> = entries
            .iter()
            .filter(|e| e.is_custom())
            .map(OverlayRecord::Entry)
            .collect();
        let kept = overlay.len();
        overlay.extend(
            rejected
                .iter()
                .filter(|r| is_custom_id(&r.id))
                .map(|r| OverlayRecord::Raw(&r.raw)),
        );

        let json = serde_json::to_string(&overlay)?;
        self.kv.set(&self.key, json)?;
        debug!(
            key = %self.key,
            count = kept,
            carried = overlay.len() - kept,
            "saved overlay"
        );
        Ok(())
    }
}

fn parse_record(record: &Value) -> std::result::Result<CatalogEntry, String> {
    let entry: CatalogEntry = serde_json::from_value(record.clone()).map_err(|e| e.to_string())?;
    if entry.sessions == 0 {
        return Err("sessions must be a positive number".to_string());
    }
    Ok(entry)
}

fn record_id(record: &Value) -> String {
    match record.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
