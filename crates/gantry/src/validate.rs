//! Validation engine for candidate roadmap entries.
//!
//! Pure decision functions over a candidate plus the current store
//! contents. The store calls [`validate`] before committing any insert or
//! update, so every path into the table (interactive or CSV import) is
//! held to the same invariants.

use crate::domain::{Entry, EntryId, NewEntry};
use crate::error::{Error, Result};
use chrono::NaiveDate;

/// The delimiter used when serializing dependency name lists.
///
/// Names containing it are rejected at validation time rather than quoted,
/// keeping the exported `Dependencies` column unambiguous.
pub const DEPENDENCY_DELIMITER: char = ';';

/// Returns `true` if two closed date intervals overlap.
///
/// Intervals that merely touch at an endpoint are not considered
/// overlapping: `[Jan 1, Jan 10]` and `[Jan 10, Jan 15]` may coexist in
/// one phase.
#[must_use]
pub fn intervals_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Decide whether a candidate entry may be inserted or committed as an
/// update, given the current store contents.
///
/// `editing` names the entry being updated, if any; that entry is excluded
/// from the relational scans so an update never conflicts with itself.
///
/// Checks run in a fixed order with short-circuit on first failure:
/// structural checks (non-empty phase, no reserved delimiter in names),
/// then date ordering, then the same-phase overlap scan, then the
/// `(phase, milestone)` duplicate scan. Cheapest and most fundamental
/// first, relational scans last.
///
/// # Errors
///
/// Returns the first failed check as a typed [`Error`].
pub fn validate(candidate: &NewEntry, existing: &[Entry], editing: Option<&EntryId>) -> Result<()> {
    if candidate.phase.trim().is_empty() {
        return Err(Error::EmptyPhase);
    }

    if candidate.milestone.contains(DEPENDENCY_DELIMITER) {
        return Err(Error::ReservedCharacter { field: "milestone" });
    }
    if candidate
        .dependencies
        .iter()
        .any(|name| name.contains(DEPENDENCY_DELIMITER))
    {
        return Err(Error::ReservedCharacter {
            field: "dependencies",
        });
    }

    if candidate.start > candidate.end {
        return Err(Error::InvalidDateRange {
            start: candidate.start,
            end: candidate.end,
        });
    }

    let others = existing
        .iter()
        .filter(|entry| editing != Some(&entry.id));

    for entry in others.clone() {
        if entry.phase == candidate.phase
            && intervals_overlap(candidate.start, candidate.end, entry.start, entry.end)
        {
            return Err(Error::OverlappingInterval {
                phase: entry.phase.clone(),
                milestone: entry.milestone.clone(),
            });
        }
    }

    for entry in others {
        if entry.phase == candidate.phase && entry.milestone == candidate.milestone {
            return Err(Error::DuplicateEntry {
                phase: candidate.phase.clone(),
                milestone: candidate.milestone.clone(),
            });
        }
    }

    Ok(())
}
