//! EntryStore trait implementation for in-memory storage.

use super::InMemoryStore;
use crate::domain::{dedup_dependencies, default_color, Entry, EntryId, EntryPatch, NewEntry};
use crate::error::{Error, Result};
use crate::store::EntryStore;
use crate::validate::validate;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl EntryStore for InMemoryStore {
    async fn insert(&mut self, entry: NewEntry) -> Result<Entry> {
        let mut inner = self.lock().await;

        // Normalize before validating so the committed entry and the
        // validated candidate are the same thing.
        let mut candidate = entry;
        candidate.dependencies = dedup_dependencies(candidate.dependencies);

        // Phase 1: validate against current contents (no mutation).
        validate(&candidate, &inner.entries, None)?;

        // Phase 2: assign identity and defaults, then commit.
        let id = inner.generate_id(&candidate)?;
        let color = candidate
            .color
            .unwrap_or_else(|| default_color(inner.entries.len()));

        let stored = Entry {
            id: id.clone(),
            phase: candidate.phase,
            milestone: candidate.milestone,
            start: candidate.start,
            end: candidate.end,
            color,
            notes: candidate.notes,
            dependencies: candidate.dependencies,
        };

        inner.entries.push(stored.clone());

        debug!(
            id = %id,
            phase = %stored.phase,
            milestone = %stored.milestone,
            "inserted roadmap entry"
        );

        Ok(stored)
    }

    async fn get(&self, id: &EntryId) -> Result<Option<Entry>> {
        let inner = self.lock().await;
        Ok(inner.position(id).map(|index| inner.entries[index].clone()))
    }

    async fn update(&mut self, id: &EntryId, patch: EntryPatch) -> Result<Entry> {
        let mut inner = self.lock().await;

        let index = inner
            .position(id)
            .ok_or_else(|| Error::EntryNotFound(id.clone()))?;

        // Build the fully patched entry aside, validate it, and only then
        // commit; a failed check must leave the stored entry untouched.
        let mut patched = inner.entries[index].clone();
        if let Some(start) = patch.start {
            patched.start = start;
        }
        if let Some(end) = patch.end {
            patched.end = end;
        }
        if let Some(color) = patch.color {
            patched.color = color;
        }
        if let Some(notes) = patch.notes {
            patched.notes = notes;
        }
        if let Some(dependencies) = patch.dependencies {
            patched.dependencies = dedup_dependencies(dependencies);
        }

        let candidate = NewEntry {
            phase: patched.phase.clone(),
            milestone: patched.milestone.clone(),
            start: patched.start,
            end: patched.end,
            color: Some(patched.color.clone()),
            notes: patched.notes.clone(),
            dependencies: patched.dependencies.clone(),
        };
        validate(&candidate, &inner.entries, Some(id))?;

        inner.entries[index] = patched.clone();

        debug!(id = %id, "updated roadmap entry");

        Ok(patched)
    }

    async fn delete(&mut self, id: &EntryId) -> Result<()> {
        let mut inner = self.lock().await;

        let index = inner
            .position(id)
            .ok_or_else(|| Error::EntryNotFound(id.clone()))?;

        let removed = inner.entries.remove(index);

        debug!(
            id = %removed.id,
            milestone = %removed.milestone,
            "deleted roadmap entry"
        );

        Ok(())
    }

    async fn all(&self) -> Result<Vec<Entry>> {
        let inner = self.lock().await;
        Ok(inner.entries.clone())
    }

    async fn find_by_milestone(&self, name: &str) -> Result<Option<Entry>> {
        let inner = self.lock().await;
        Ok(inner
            .entries
            .iter()
            .find(|entry| entry.milestone == name)
            .cloned())
    }
}
