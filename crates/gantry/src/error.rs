//! Error types for gantry operations.

use crate::domain::EntryId;
use chrono::NaiveDate;
use thiserror::Error;

/// The error type for gantry operations.
///
/// Every variant is a typed rejection returned to the caller; nothing here
/// is fatal, and a rejected operation always leaves the store unchanged.
/// The enum is `Clone + PartialEq` so import reports can carry errors by
/// value alongside the record they rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Phase labels are the grouping axis and must not be empty.
    #[error("phase label must not be empty")]
    EmptyPhase,

    /// Milestone or dependency names must not contain the dependency
    /// list delimiter `;`.
    #[error("reserved character ';' in {field}")]
    ReservedCharacter {
        /// The field that contained the delimiter.
        field: &'static str,
    },

    /// The entry's start date is after its end date.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Candidate start date.
        start: NaiveDate,
        /// Candidate end date.
        end: NaiveDate,
    },

    /// The entry's interval overlaps another entry in the same phase.
    #[error("interval overlaps milestone {milestone:?} in phase {phase:?}")]
    OverlappingInterval {
        /// Phase shared with the conflicting entry.
        phase: String,
        /// Milestone of the conflicting entry already in the store.
        milestone: String,
    },

    /// An entry with the same `(phase, milestone)` pair already exists.
    #[error("duplicate entry: {phase:?} / {milestone:?} already exists")]
    DuplicateEntry {
        /// Candidate phase.
        phase: String,
        /// Candidate milestone.
        milestone: String,
    },

    /// Edit or delete of an unknown entry ID.
    #[error("entry not found: {0}")]
    EntryNotFound(EntryId),

    /// ID generation exhausted its collision-retry budget.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),

    /// An imported record had a missing required field or unparsable date.
    #[error("malformed record {record_number}: {reason}")]
    MalformedRecord {
        /// 1-based record number within the imported file.
        record_number: usize,
        /// Description of what made the record unusable.
        reason: String,
    },

    /// The CSV input as a whole could not be read.
    #[error("invalid CSV input: {0}")]
    InvalidCsv(String),
}

/// A specialized Result type for gantry operations.
pub type Result<T> = std::result::Result<T, Error>;
