//! Create/edit form for a single catalog entry.
//!
//! The controller holds one mutable draft and tracks whether it is creating a
//! new entry or editing an existing one. `commit` validates the draft and
//! merges it into a list the caller then persists.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::entity::{
    format_timestamp, route_for, slugify, CatalogEntry, Category, Difficulty, EntryStatus,
    Gradient, Icon,
};
use crate::error::{CatalogError, Result};

/// First failed rule, in the order the form checks them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Duration is required")]
    DurationRequired,

    #[error("Sessions must be a positive number")]
    SessionsNotPositive,

    #[error("Sessions must be at most {max}", max = u32::MAX)]
    SessionsTooLarge,
}

/// In-progress entry values.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub color: Gradient,
    pub duration: String,
    pub difficulty: Difficulty,
    /// Signed so that a zero or negative entry can be held and rejected.
    pub sessions: i64,
    pub category: Category,
    pub tags: Vec<String>,
    pub status: EntryStatus,
    pub route: Option<String>,
    pub module_id: Option<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            icon: Icon::Brain,
            color: Gradient::PurpleToPink,
            duration: "15-20 min".to_string(),
            difficulty: Difficulty::Beginner,
            sessions: 12,
            category: Category::CognitiveTherapy,
            tags: Vec::new(),
            status: EntryStatus::Active,
            route: None,
            module_id: None,
        }
    }
}

impl From<&CatalogEntry> for Draft {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            icon: entry.icon,
            color: entry.color,
            duration: entry.duration.clone(),
            difficulty: entry.difficulty,
            sessions: i64::from(entry.sessions),
            category: entry.category,
            tags: entry.tags.clone(),
            status: entry.status,
            route: Some(entry.route.clone()),
            module_id: Some(entry.module_id.clone()),
        }
    }
}

impl Draft {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::DescriptionRequired);
        }
        if self.duration.trim().is_empty() {
            return Err(ValidationError::DurationRequired);
        }
        self.checked_sessions()?;
        Ok(())
    }

    fn checked_sessions(&self) -> std::result::Result<u32, ValidationError> {
        if self.sessions <= 0 {
            return Err(ValidationError::SessionsNotPositive);
        }
        u32::try_from(self.sessions).map_err(|_| ValidationError::SessionsTooLarge)
    }

    /// Build an entry from a validated draft. Route and module id are only
    /// derived from the title when the draft leaves them empty.
    fn to_entry(
        &self,
        sessions: u32,
        id: String,
        created_at: String,
        updated_at: String,
    ) -> CatalogEntry {
        let route = match self.route.as_deref() {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => route_for(&self.title),
        };
        let module_id = match self.module_id.as_deref() {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => slugify(&self.title),
        };

        CatalogEntry {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            icon: self.icon,
            color: self.color,
            duration: self.duration.clone(),
            difficulty: self.difficulty,
            sessions,
            category: self.category,
            tags: self.tags.clone(),
            status: self.status,
            route,
            module_id,
            created_at,
            updated_at,
        }
    }
}

/// A single field assignment on the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Title(String),
    Description(String),
    Icon(Icon),
    Color(Gradient),
    Duration(String),
    Difficulty(Difficulty),
    Sessions(i64),
    Category(Category),
    Status(EntryStatus),
    Route(String),
    ModuleId(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    CreatingDraft,
    EditingDraft {
        target_id: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct EntryFormController {
    state: FormState,
    draft: Draft,
}

impl EntryFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    pub fn open_for_create(&mut self) {
        self.state = FormState::CreatingDraft;
        self.draft = Draft::default();
    }

    pub fn open_for_edit(&mut self, entry: &CatalogEntry) {
        self.state = FormState::EditingDraft {
            target_id: entry.id.clone(),
        };
        self.draft = Draft::from(entry);
    }

    pub fn set_field(&mut self, field: DraftField) {
        let draft = &mut self.draft;
        match field {
            DraftField::Title(v) => draft.title = v,
            DraftField::Description(v) => draft.description = v,
            DraftField::Icon(v) => draft.icon = v,
            DraftField::Color(v) => draft.color = v,
            DraftField::Duration(v) => draft.duration = v,
            DraftField::Difficulty(v) => draft.difficulty = v,
            DraftField::Sessions(v) => draft.sessions = v,
            DraftField::Category(v) => draft.category = v,
            DraftField::Status(v) => draft.status = v,
            DraftField::Route(v) => draft.route = Some(v),
            DraftField::ModuleId(v) => draft.module_id = Some(v),
        }
    }

    /// Add `tag` if the draft lacks it, otherwise remove it.
    pub fn toggle_tag(&mut self, tag: &str) {
        let tags = &mut self.draft.tags;
        if let Some(pos) = tags.iter().position(|t| t == tag) {
            tags.remove(pos);
        } else {
            tags.push(tag.to_string());
        }
    }

    pub fn validate(&self) -> std::result::Result<&Draft, ValidationError> {
        self.draft.validate().map(|_| &self.draft)
    }

    /// Validate and merge the draft into `entries`, stamped with the current time.
    pub fn commit(&mut self, entries: &[CatalogEntry]) -> Result<Vec<CatalogEntry>> {
        self.commit_at(entries, Utc::now())
    }

    /// Like [`commit`](Self::commit) with an explicit clock reading.
    ///
    /// On any error the form state and `entries` are left as they were.
    pub fn commit_at(
        &mut self,
        entries: &[CatalogEntry],
        now: DateTime<Utc>,
    ) -> Result<Vec<CatalogEntry>> {
        if self.state == FormState::Closed {
            return Err(CatalogError::FormNotOpen);
        }

        self.draft.validate()?;
        let sessions = self.draft.checked_sessions()?;

        let stamp = format_timestamp(now);
        let updated = match &self.state {
            FormState::EditingDraft { target_id } => {
                let original = entries
                    .iter()
                    .find(|e| &e.id == target_id)
                    .ok_or_else(|| CatalogError::EntryNotFound(target_id.clone()))?;
                let replacement = self.draft.to_entry(
                    sessions,
                    original.id.clone(),
                    original.created_at.clone(),
                    stamp,
                );
                info!(id = %replacement.id, title = %replacement.title, "updated entry");

                entries
                    .iter()
                    .map(|e| {
                        if &e.id == target_id {
                            replacement.clone()
                        } else {
                            e.clone()
                        }
                    })
                    .collect()
            }
            _ => {
                let id = fresh_id(entries, now);
                let entry = self.draft.to_entry(sessions, id, stamp.clone(), stamp);
                info!(id = %entry.id, title = %entry.title, "created entry");

                let mut list = entries.to_vec();
                list.push(entry);
                list
            }
        };

        self.close();
        Ok(updated)
    }

    pub fn close(&mut self) {
        self.state = FormState::Closed;
        self.draft = Draft::default();
    }
}

/// Epoch-millisecond id, bumped past any id already in use.
fn fresh_id(entries: &[CatalogEntry], now: DateTime<Utc>) -> String {
    let mut candidate = now.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !entries.iter().any(|e| e.id == id) {
            return id;
        }
        candidate += 1;
    }
}
