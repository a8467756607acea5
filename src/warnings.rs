//! Sanity warnings for the stored overlay.
//!
//! Only entries with an id above the seed range are persisted, so an overlay
//! entry keyed inside that range (or with a non-numeric id) is silently dropped
//! on the next save.

use std::collections::HashSet;

use crate::entity::{CatalogEntry, SEED_ID_CEILING};

/// A problem found in the stored overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Entry id is not above the seed range and will not be saved again.
    SeedRangeId { id: String, title: String },
    /// More than one overlay entry uses this id.
    DuplicateId { id: String, count: usize },
    /// Stored record that could not be loaded; it is kept in storage as-is.
    UnreadableEntry { id: String, reason: String },
}

/// Check the overlay and return any warnings.
///
/// # Returns
/// A vector of warnings (empty if the overlay is clean)
pub fn check_overlay(overlay: &[CatalogEntry]) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for entry in overlay.iter().filter(|e| !e.is_custom()) {
        warnings.push(Warning::SeedRangeId {
            id: entry.id.clone(),
            title: entry.title.clone(),
        });
    }

    let mut reported = HashSet::new();
    for entry in overlay {
        let count = overlay.iter().filter(|e| e.id == entry.id).count();
        if count > 1 && reported.insert(entry.id.as_str()) {
            warnings.push(Warning::DuplicateId {
                id: entry.id.clone(),
                count,
            });
        }
    }

    warnings
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::SeedRangeId { id, title } => {
            format!(
                "Warning: stored entry '{}' has id {} (not above {}) and will be dropped on the next save",
                title, id, SEED_ID_CEILING
            )
        }
        Warning::DuplicateId { id, count } => {
            format!("Warning: {} stored entries share id {}", count, id)
        }
        Warning::UnreadableEntry { id, reason } => {
            format!(
                "Warning: stored entry {} could not be loaded and is hidden ({})",
                id, reason
            )
        }
    }
}
