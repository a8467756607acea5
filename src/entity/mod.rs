mod options;
mod seed;

pub use options::{Category, Difficulty, EntryStatus, Gradient, Icon, TAG_VOCABULARY};
pub use seed::{seed_entries, SEED_COUNT};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Route prefix for module pages.
pub const ROUTE_PREFIX: &str = "/therapy-modules";

/// Highest id reserved for the built-in seed set.
pub const SEED_ID_CEILING: u64 = 10;

/// One therapy module card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub color: Gradient,
    pub duration: String,
    pub difficulty: Difficulty,
    pub sessions: u32,
    pub category: Category,
    pub tags: Vec<String>,
    pub status: EntryStatus,
    pub route: String,
    pub module_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl CatalogEntry {
    pub fn is_active(&self) -> bool {
        self.status == EntryStatus::Active
    }

    /// Whether this entry belongs in the persisted overlay.
    pub fn is_custom(&self) -> bool {
        is_custom_id(&self.id)
    }
}

/// Reads the leading integer of an id the way the stored overlay was keyed:
/// optional surrounding whitespace and sign, then digits, trailing junk ignored.
pub fn numeric_id(id: &str) -> Option<i64> {
    let trimmed = id.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Saturate instead of failing on ids longer than i64 allows.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// User-created entries are the ones with a numeric id above the seed range.
pub fn is_custom_id(id: &str) -> bool {
    numeric_id(id).is_some_and(|n| n > SEED_ID_CEILING as i64)
}

/// Lowercase and collapse each whitespace run into a single hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

pub fn route_for(title: &str) -> String {
    format!("{}/{}", ROUTE_PREFIX, slugify(title))
}

/// Timestamp format used for createdAt / updatedAt on every write.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
