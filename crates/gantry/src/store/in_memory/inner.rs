//! Core in-memory storage data structures.
//!
//! The inner structure holds the actual entry collection and is wrapped
//! in `Arc<Mutex<>>` for thread safety.

use crate::domain::{Entry, EntryId, NewEntry};
use crate::error::{Error, Result};
use crate::id_generation::IdGenerator;

/// Inner storage structure (not thread-safe on its own).
pub(crate) struct InMemoryStoreInner {
    /// Entries in insertion order. Insertion order is the display order
    /// within a phase before any render-time grouping.
    pub(super) entries: Vec<Entry>,

    /// ID generator; remembers every issued ID so none is ever reused.
    pub(super) id_generator: IdGenerator,
}

impl InMemoryStoreInner {
    /// Create a new empty store instance.
    pub(crate) fn new(prefix: String) -> Self {
        Self {
            entries: Vec::new(),
            id_generator: IdGenerator::new(prefix),
        }
    }

    /// Generate a fresh unique ID for a candidate entry.
    pub(super) fn generate_id(&mut self, candidate: &NewEntry) -> Result<EntryId> {
        let id = self
            .id_generator
            .generate(&candidate.phase, &candidate.milestone)
            .map_err(Error::IdGeneration)?;

        Ok(EntryId::new(id))
    }

    /// Position of the entry with the given ID, if present.
    pub(super) fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == *id)
    }
}
