//! Search module: free-text and status filtering over catalog entries.

use crate::entity::{CatalogEntry, EntryStatus};

/// Status selector for the entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EntryStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: EntryStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<EntryStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| format!("Invalid status filter: {} (expected all, active or inactive)", s))
    }
}

/// Entries whose title, description, category or any tag contains
/// `search_term` (case-insensitive) and whose status passes `status`.
/// Input order is kept.
pub fn filter_entries(
    all: &[CatalogEntry],
    search_term: &str,
    status: StatusFilter,
) -> Vec<CatalogEntry> {
    let needle = search_term.to_lowercase();

    all.iter()
        .filter(|entry| needle.is_empty() || matches_term(entry, &needle))
        .filter(|entry| status.matches(entry.status))
        .cloned()
        .collect()
}

fn matches_term(entry: &CatalogEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
        || entry.category.as_str().to_lowercase().contains(needle)
        || entry.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Filters pulled out of a query string.
///
/// - `status:active` - Filter by status (`all`, `active`, `inactive`)
/// - `tag:sleep` - Entry must carry this exact tag (can specify multiple)
#[derive(Debug, Default, Clone)]
pub struct SearchFilter {
    pub status: StatusFilter,
    pub tags: Vec<String>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.status == StatusFilter::All && self.tags.is_empty()
    }

    /// Apply the term and these filters to `all`.
    pub fn apply(&self, all: &[CatalogEntry], term: &str) -> Vec<CatalogEntry> {
        filter_entries(all, term, self.status)
            .into_iter()
            .filter(|entry| {
                self.tags
                    .iter()
                    .all(|wanted| entry.tags.iter().any(|t| t.eq_ignore_ascii_case(wanted)))
            })
            .collect()
    }
}

/// Parse a raw query string into (remaining query text, filters).
///
/// An unrecognized `status:` value is kept as search text.
///
/// # Examples
///
/// ```ignore
/// let (query, filter) = parse_query("status:active tag:sleep breathing");
/// assert_eq!(query, "breathing");
/// assert_eq!(filter.tags, vec!["sleep".to_string()]);
/// ```
pub fn parse_query(raw: &str) -> (String, SearchFilter) {
    let mut filter = SearchFilter::default();
    let mut remaining = Vec::new();

    for token in raw.split_whitespace() {
        if let Some(value) = token.strip_prefix("status:") {
            match value.parse() {
                Ok(status) => filter.status = status,
                Err(_) => remaining.push(token),
            }
        } else if let Some(value) = token.strip_prefix("tag:") {
            filter.tags.push(value.to_string());
        } else {
            remaining.push(token);
        }
    }

    (remaining.join(" "), filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::seed_entries;

    fn titles(entries: &[CatalogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_empty_term_and_all_returns_everything() {
        let all = seed_entries();
        let filtered = filter_entries(&all, "", StatusFilter::All);
        assert_eq!(filtered, all);
    }

    #[test]
    fn test_gratitude_matches_only_gratitude_journal() {
        let all = seed_entries();
        let filtered = filter_entries(&all, "gratitude", StatusFilter::All);
        assert_eq!(titles(&filtered), vec!["Gratitude Journal"]);
    }

    #[test]
    fn test_term_is_case_insensitive() {
        let all = seed_entries();
        let filtered = filter_entries(&all, "TETRIS", StatusFilter::All);
        assert_eq!(titles(&filtered), vec!["Tetris Therapy"]);
    }

    #[test]
    fn test_term_matches_category_and_tags() {
        let all = seed_entries();

        let by_category = filter_entries(&all, "positive psychology", StatusFilter::All);
        assert_eq!(titles(&by_category), vec!["Gratitude Journal"]);

        let by_tag = filter_entries(&all, "phobias", StatusFilter::All);
        assert_eq!(titles(&by_tag), vec!["Exposure Therapy"]);
    }

    #[test]
    fn test_status_filter_keeps_order() {
        let mut all = seed_entries();
        all[2].status = EntryStatus::Inactive;
        all[7].status = EntryStatus::Inactive;

        let inactive = filter_entries(&all, "", StatusFilter::Only(EntryStatus::Inactive));
        assert_eq!(titles(&inactive), vec!["Stress Management", "Exposure Therapy"]);

        let active = filter_entries(&all, "", StatusFilter::Only(EntryStatus::Active));
        assert_eq!(active.len(), 8);
        assert_eq!(active[0].id, "1");
        assert_eq!(active[2].id, "4");
    }

    #[test]
    fn test_term_and_status_combined() {
        let mut all = seed_entries();
        all[0].status = EntryStatus::Inactive;

        let filtered = filter_entries(&all, "anxiety", StatusFilter::Only(EntryStatus::Active));
        assert_eq!(titles(&filtered), vec!["Exposure Therapy"]);
    }

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "Inactive".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(EntryStatus::Inactive)
        );
        assert!("archived".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_parse_query_no_filters() {
        let (query, filter) = parse_query("hello world");
        assert_eq!(query, "hello world");
        assert!(filter.is_empty());
    }

    #[test]
    fn test_parse_query_status_and_tags() {
        let (query, filter) = parse_query("status:inactive tag:sleep tag:mood night routine");
        assert_eq!(query, "night routine");
        assert_eq!(filter.status, StatusFilter::Only(EntryStatus::Inactive));
        assert_eq!(filter.tags, vec!["sleep".to_string(), "mood".to_string()]);
    }

    #[test]
    fn test_parse_query_unknown_status_is_text() {
        let (query, filter) = parse_query("status:paused");
        assert_eq!(query, "status:paused");
        assert!(filter.is_empty());
    }

    #[test]
    fn test_apply_requires_exact_tags() {
        let all = seed_entries();
        let (query, filter) = parse_query("tag:journaling");
        let hits = filter.apply(&all, &query);
        assert_eq!(titles(&hits), vec!["CBT Thought Records", "Gratitude Journal"]);

        let (query, filter) = parse_query("tag:journal");
        assert!(filter.apply(&all, &query).is_empty());
    }
}
