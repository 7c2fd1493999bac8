//! Search/filter over store snapshots.
//!
//! A filter is a pure view: it never mutates the store, it only narrows a
//! snapshot before the render model is built. Dependency arrows are later
//! resolved against the filtered view, so filtering a dependency's target
//! out of view also hides its arrow.

use crate::domain::Entry;

/// Filter a snapshot by case-insensitive substring match on phase OR
/// milestone.
///
/// An empty (or whitespace-only) query returns the snapshot unchanged.
/// The operation is idempotent: filtering an already-filtered result with
/// the same query changes nothing.
#[must_use]
pub fn filter_entries(entries: &[Entry], query: &str) -> Vec<Entry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| {
            entry.phase.to_lowercase().contains(&needle)
                || entry.milestone.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
