//! Storage layer for roadmap entries.
//!
//! This module provides the core [`EntryStore`] trait and the in-memory
//! backend behind it. The trait is async and object-safe so a session can
//! hold `Box<dyn EntryStore>` and, if embedded in a concurrent UI runtime,
//! share it across tasks: the in-memory backend serializes mutations
//! behind a mutex while reads hand out cloned snapshots.
//!
//! # Ordering
//!
//! The store preserves insertion order. `all()` returns entries in the
//! order they were accepted, which is the display order within a phase
//! before any render-time grouping.
//!
//! # Error Handling
//!
//! Every mutating method validates before committing; a rejected
//! operation returns a typed [`Error`](crate::error::Error) and leaves
//! the store exactly as it was.
//!
//! # Example
//!
//! ```
//! use gantry::domain::NewEntry;
//! use gantry::store::new_in_memory_store;
//! use chrono::NaiveDate;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut store = new_in_memory_store("roadmap".to_string());
//!
//!     let entry = store
//!         .insert(NewEntry::new(
//!             "Design",
//!             "Kickoff",
//!             NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!             NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!         ))
//!         .await?;
//!
//!     println!("created entry: {}", entry.id);
//!     Ok(())
//! }
//! ```

use crate::domain::{Entry, EntryId, EntryPatch, NewEntry};
use crate::error::Result;
use async_trait::async_trait;

pub mod in_memory;

pub use in_memory::new_in_memory_store;

/// Core storage trait for roadmap entries.
///
/// Implementations must be `Send + Sync` to support concurrent access in
/// async contexts, and must run every insert/update through the
/// validation engine so the store invariants (date ordering, per-phase
/// overlap rejection, `(phase, milestone)` uniqueness) hold at all times.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Insert a validated entry.
    ///
    /// Assigns a fresh ID, defaults the color when the candidate carries
    /// none, and appends the entry to the ordered collection.
    ///
    /// # Errors
    ///
    /// Returns the first failed validation check; the store is unchanged
    /// on failure.
    async fn insert(&mut self, entry: NewEntry) -> Result<Entry>;

    /// Get an entry by ID.
    ///
    /// Returns `None` if the entry doesn't exist.
    async fn get(&self, id: &EntryId) -> Result<Option<Entry>>;

    /// Apply a partial update to an existing entry.
    ///
    /// The fully patched entry is re-validated (with the entry itself
    /// excluded from the relational scans) before anything is committed;
    /// either the whole patch applies or none of it does.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntryNotFound` for an unknown ID, or the first
    /// failed validation check.
    async fn update(&mut self, id: &EntryId, patch: EntryPatch) -> Result<Entry>;

    /// Delete an entry by ID.
    ///
    /// Deletion does not cascade: entries whose dependency names pointed
    /// at the deleted milestone simply become unresolved.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntryNotFound` for an unknown ID.
    async fn delete(&mut self, id: &EntryId) -> Result<()>;

    /// Insertion-ordered snapshot of all entries.
    async fn all(&self) -> Result<Vec<Entry>>;

    /// First entry whose milestone equals `name`, in insertion order.
    ///
    /// Milestone names are only unique per phase, so a name may match
    /// several entries; the first match is the deterministic winner used
    /// for dependency-arrow resolution.
    async fn find_by_milestone(&self, name: &str) -> Result<Option<Entry>>;
}
