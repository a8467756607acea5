//! List-level mutations and dashboard counters.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::{format_timestamp, CatalogEntry};

/// Remove the entry with `id`. Unknown ids leave the list as it was.
pub fn delete_entry(entries: &[CatalogEntry], id: &str) -> Vec<CatalogEntry> {
    entries.iter().filter(|e| e.id != id).cloned().collect()
}

/// Flip active/inactive on the entry with `id` and refresh its updatedAt.
pub fn toggle_status(entries: &[CatalogEntry], id: &str) -> Vec<CatalogEntry> {
    toggle_status_at(entries, id, Utc::now())
}

pub fn toggle_status_at(
    entries: &[CatalogEntry],
    id: &str,
    now: DateTime<Utc>,
) -> Vec<CatalogEntry> {
    entries
        .iter()
        .map(|e| {
            if e.id == id {
                CatalogEntry {
                    status: e.status.flipped(),
                    updated_at: format_timestamp(now),
                    ..e.clone()
                }
            } else {
                e.clone()
            }
        })
        .collect()
}

/// Summary counters shown above the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    pub categories: usize,
    pub total_sessions: u64,
}

impl CatalogStats {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let categories: HashSet<_> = entries.iter().map(|e| e.category).collect();

        Self {
            total: entries.len(),
            active: entries.iter().filter(|e| e.is_active()).count(),
            categories: categories.len(),
            total_sessions: entries.iter().map(|e| u64::from(e.sessions)).sum(),
        }
    }
}
