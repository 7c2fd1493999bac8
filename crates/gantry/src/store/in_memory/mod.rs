//! In-memory storage backend for roadmap entries.
//!
//! All data lives in RAM for the lifetime of the session and is lost when
//! the process exits; CSV export/import is the only persistence surface.
//!
//! # Architecture
//!
//! - `Vec<Entry>` as the ordered collection (insertion order = display
//!   order), scanned linearly for lookups — roadmap tables are small
//!   enough that index maps would buy nothing
//! - Hash-based ID generation with an issued-ID set so IDs are never
//!   reused within a session
//!
//! # Thread Safety
//!
//! The storage is wrapped in `Arc<tokio::sync::Mutex<_>>`. Every
//! operation takes the lock, so mutations are serialized (one in flight
//! at a time) and reads observe no partial state.

mod inner;
mod trait_impl;

use crate::store::EntryStore;
use inner::InMemoryStoreInner;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Thread-safe in-memory store.
///
/// This type alias wraps the inner store in `Arc<Mutex<>>` for
/// thread-safe async access. It implements [`EntryStore`] via the trait
/// implementation in `trait_impl.rs`.
pub(crate) type InMemoryStore = Arc<Mutex<InMemoryStoreInner>>;

/// Create a new in-memory store instance.
///
/// # Arguments
///
/// * `prefix` - The prefix for entry IDs (e.g. "roadmap")
pub fn new_in_memory_store(prefix: String) -> Box<dyn EntryStore> {
    Box::new(Arc::new(Mutex::new(InMemoryStoreInner::new(prefix))))
}
