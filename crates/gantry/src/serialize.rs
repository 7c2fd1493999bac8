//! CSV serialization adapter for roadmap entries.
//!
//! Defines the flat record schema (`Phase, Milestone, Start, End, Color,
//! Notes, Dependencies`) exchanged with the outside world and the mapping
//! between records and domain types. Dates travel as ISO 8601
//! (`YYYY-MM-DD`); dependency names as a `;`-joined list. Internal entry
//! IDs never leave the process — import always assigns fresh ones.
//!
//! The byte-level encode/decode mechanics live in the `gantry-csv` crate;
//! this module owns the schema and the per-record conversion, including
//! the malformed-record errors surfaced in an [`ImportReport`].

use crate::domain::{Entry, NewEntry};
use crate::error::{Error, Result};
use crate::validate::DEPENDENCY_DELIMITER;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format for the `Start` and `End` columns.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One flat CSV record in the export/import schema.
///
/// Required columns are `Phase`, `Milestone`, `Start`, `End`; a record
/// missing any of them fails to deserialize and is rejected whole.
/// Optional columns default to empty. Unrecognized columns are ignored by
/// the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Grouping label.
    #[serde(rename = "Phase")]
    pub phase: String,

    /// Milestone label.
    #[serde(rename = "Milestone")]
    pub milestone: String,

    /// Start date, `YYYY-MM-DD`.
    #[serde(rename = "Start")]
    pub start: String,

    /// End date, `YYYY-MM-DD`.
    #[serde(rename = "End")]
    pub end: String,

    /// Display color; empty means "pick a default on import".
    #[serde(rename = "Color", default)]
    pub color: Option<String>,

    /// Free-text notes.
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,

    /// `;`-joined dependency milestone names.
    #[serde(rename = "Dependencies", default)]
    pub dependencies: Option<String>,
}

impl EntryRecord {
    /// Flatten a stored entry into its export record.
    ///
    /// The internal `id` is deliberately dropped; IDs are a session-local
    /// concern and are regenerated on import.
    #[must_use]
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            phase: entry.phase.clone(),
            milestone: entry.milestone.clone(),
            start: entry.start.format(DATE_FORMAT).to_string(),
            end: entry.end.format(DATE_FORMAT).to_string(),
            color: Some(entry.color.clone()),
            notes: entry.notes.clone(),
            dependencies: if entry.dependencies.is_empty() {
                None
            } else {
                Some(entry.dependencies.join(&DEPENDENCY_DELIMITER.to_string()))
            },
        }
    }

    /// Parse this record into an insert candidate.
    ///
    /// `record_number` is the 1-based position of the record in the
    /// imported file, used to label malformed-record errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] when a date cannot be parsed.
    /// Relational checks (overlap, duplicates) are not run here; the
    /// candidate still goes through the same validation engine as an
    /// interactive insert.
    pub fn into_candidate(self, record_number: usize) -> Result<NewEntry> {
        let start = parse_date(&self.start, "Start", record_number)?;
        let end = parse_date(&self.end, "End", record_number)?;

        let dependencies = self
            .dependencies
            .as_deref()
            .unwrap_or_default()
            .split(DEPENDENCY_DELIMITER)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        Ok(NewEntry {
            phase: self.phase,
            milestone: self.milestone,
            start,
            end,
            color: self.color.filter(|color| !color.is_empty()),
            notes: self.notes.filter(|notes| !notes.is_empty()),
            dependencies,
        })
    }
}

fn parse_date(value: &str, column: &str, record_number: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| Error::MalformedRecord {
        record_number,
        reason: format!("column {column}: unparsable date {value:?} (expected YYYY-MM-DD)"),
    })
}

/// One record rejected during import, with enough context to point the
/// user at the offending row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// 1-based record number within the imported file.
    pub record_number: usize,

    /// Phase field of the record, when the row was readable at all.
    pub phase: Option<String>,

    /// Milestone field of the record, when the row was readable at all.
    pub milestone: Option<String>,

    /// Why the record was rejected.
    pub error: Error,
}

/// Outcome of a CSV import.
///
/// Import is partial: every record is validated in file order, valid
/// records are committed as they pass, and failures are collected here
/// instead of aborting the rest of the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries created by this import, in file order.
    pub created: Vec<Entry>,

    /// Records rejected by this import, in file order.
    pub rejected: Vec<RejectedRecord>,
}

impl ImportReport {
    /// Returns `true` if every record in the file was imported.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}
