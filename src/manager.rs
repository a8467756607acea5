//! The admin screen's state: the working list, the entry form, and the store
//! the list is written back to after every mutation.

use tracing::info;

use crate::catalog::{delete_entry, toggle_status, CatalogStats};
use crate::entity::{CatalogEntry, EntryStatus};
use crate::error::{CatalogError, Result};
use crate::form::{EntryFormController, FormState};
use crate::host::{delete_prompt, Confirm, Notice, Notifier};
use crate::search::{filter_entries, StatusFilter};
use crate::session::Session;
use crate::storage::{CatalogStore, KeyValueStore};
use crate::warnings::{check_overlay, Warning};

pub struct CatalogManager<S> {
    store: CatalogStore<S>,
    entries: Vec<CatalogEntry>,
    form: EntryFormController,
}

impl<S: KeyValueStore> CatalogManager<S> {
    /// Load the catalog for an admin session. Any other role is refused
    /// before storage is touched.
    pub fn open(session: &Session, store: CatalogStore<S>) -> Result<Self> {
        session.require_admin()?;

        let entries = store.load();
        info!(count = entries.len(), "catalog loaded");

        Ok(Self {
            store,
            entries,
            form: EntryFormController::new(),
        })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn visible(&self, search_term: &str, status: StatusFilter) -> Vec<CatalogEntry> {
        filter_entries(&self.entries, search_term, status)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_entries(&self.entries)
    }

    /// Problems in the stored overlay. An unreadable slot reports nothing
    /// here; `load` already fell back to the seed set.
    pub fn overlay_warnings(&self) -> Vec<Warning> {
        match self.store.stored_overlay() {
            Ok(stored) => {
                let mut warnings = check_overlay(&stored.entries);
                warnings.extend(stored.rejected.into_iter().map(|r| Warning::UnreadableEntry {
                    id: r.id,
                    reason: r.reason,
                }));
                warnings
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn form(&self) -> &EntryFormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryFormController {
        &mut self.form
    }

    /// Open the form on an existing entry.
    pub fn edit(&mut self, id: &str) -> Result<()> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CatalogError::EntryNotFound(id.to_string()))?;
        self.form.open_for_edit(entry);
        Ok(())
    }

    /// Commit the form, persist, and return the saved entry. A failed
    /// validation or write is reported through `notifier` and leaves the
    /// form open with its draft.
    pub fn save_form(&mut self, notifier: &mut dyn Notifier) -> Result<CatalogEntry> {
        let target = match self.form.state() {
            FormState::EditingDraft { target_id } => Some(target_id.clone()),
            _ => None,
        };
        let before_commit = self.form.clone();

        let updated = match self.form.commit(&self.entries) {
            Ok(list) => list,
            Err(e) => {
                notifier.notify(&Notice::Failed(e.to_string()));
                return Err(e);
            }
        };

        let saved = match &target {
            Some(id) => updated.iter().find(|e| &e.id == id),
            None => updated.last(),
        }
        .cloned()
        .ok_or_else(|| CatalogError::Storage("committed entry missing from list".to_string()))?;

        if let Err(e) = self.replace(updated) {
            self.form = before_commit;
            notifier.notify(&Notice::Failed(e.to_string()));
            return Err(e);
        }
        let notice = if target.is_some() {
            Notice::Updated
        } else {
            Notice::Created
        };
        notifier.notify(&notice);

        Ok(saved)
    }

    /// Delete after confirmation. Returns whether the entry was removed.
    pub fn delete(
        &mut self,
        id: &str,
        confirm: &mut dyn Confirm,
        notifier: &mut dyn Notifier,
    ) -> Result<bool> {
        let title = self
            .find(id)
            .map(|e| e.title.clone())
            .ok_or_else(|| CatalogError::EntryNotFound(id.to_string()))?;

        if !confirm.confirm(&delete_prompt(&title))? {
            return Ok(false);
        }

        let updated = delete_entry(&self.entries, id);
        self.replace(updated)?;
        info!(id, title = %title, "deleted entry");
        notifier.notify(&Notice::Deleted);

        Ok(true)
    }

    /// Flip an entry between active and inactive and return its new state.
    pub fn toggle(&mut self, id: &str, notifier: &mut dyn Notifier) -> Result<CatalogEntry> {
        if self.find(id).is_none() {
            return Err(CatalogError::EntryNotFound(id.to_string()));
        }

        let updated = toggle_status(&self.entries, id);
        self.replace(updated)?;

        let entry = self
            .find(id)
            .cloned()
            .ok_or_else(|| CatalogError::EntryNotFound(id.to_string()))?;
        info!(id, status = %entry.status, "toggled entry");
        notifier.notify(&match entry.status {
            EntryStatus::Active => Notice::Activated(entry.title.clone()),
            EntryStatus::Inactive => Notice::Deactivated(entry.title.clone()),
        });

        Ok(entry)
    }

    fn replace(&mut self, entries: Vec<CatalogEntry>) -> Result<()> {
        self.store.save(&entries)?;
        self.entries = entries;
        Ok(())
    }
}
