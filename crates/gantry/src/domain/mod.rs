//! Domain types for roadmap planning.
//!
//! This module contains the core domain types for the gantry roadmap store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default display colors cycled through when a caller supplies none.
///
/// The palette matches the common ten-color plotting default so freshly
/// created entries are visually distinct without any caller configuration.
const DEFAULT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Pick a default display color for the entry at the given position.
///
/// Colors cycle through a fixed palette; the choice has no semantic effect
/// beyond rendering.
#[must_use]
pub fn default_color(position: usize) -> String {
    DEFAULT_PALETTE[position % DEFAULT_PALETTE.len()].to_string()
}

/// Unique identifier for a roadmap entry.
///
/// Assigned by the store at creation, immutable afterwards, and never
/// reused within a session even after the entry is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub String);

impl EntryId {
    /// Create a new entry ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One roadmap item: a milestone within a phase, spanning a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned at creation.
    pub id: EntryId,

    /// Grouping label; many entries may share a phase.
    pub phase: String,

    /// Milestone label; `(phase, milestone)` is unique within a store.
    pub milestone: String,

    /// First day of the interval (inclusive).
    pub start: NaiveDate,

    /// Last day of the interval (inclusive); never before `start`.
    pub end: NaiveDate,

    /// Display color; no semantic effect beyond rendering.
    pub color: String,

    /// Free-text notes.
    pub notes: Option<String>,

    /// Milestone names this entry depends on.
    ///
    /// Names are matched by value against other entries' milestones;
    /// unresolved names are retained and simply produce no arrow.
    pub dependencies: Vec<String>,
}

/// Data for creating a new roadmap entry.
///
/// The store assigns the ID and defaults the color, so neither appears
/// here as a required field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// Grouping label (must be non-empty).
    pub phase: String,

    /// Milestone label.
    pub milestone: String,

    /// First day of the interval (inclusive).
    pub start: NaiveDate,

    /// Last day of the interval (inclusive).
    pub end: NaiveDate,

    /// Display color; defaulted from a fixed palette when `None`.
    pub color: Option<String>,

    /// Free-text notes.
    pub notes: Option<String>,

    /// Milestone names this entry depends on.
    pub dependencies: Vec<String>,
}

impl NewEntry {
    /// Convenience constructor for the required fields.
    pub fn new(
        phase: impl Into<String>,
        milestone: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            phase: phase.into(),
            milestone: milestone.into(),
            start,
            end,
            color: None,
            notes: None,
            dependencies: Vec::new(),
        }
    }
}

/// Partial update for an existing entry.
///
/// Identity fields (`phase`, `milestone`) are immutable post-creation;
/// everything else can be patched. Only fields present are modified, and
/// the whole patch applies atomically or not at all.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    /// New start date (if updating).
    pub start: Option<NaiveDate>,

    /// New end date (if updating).
    pub end: Option<NaiveDate>,

    /// New display color (if updating).
    pub color: Option<String>,

    /// New notes (if updating, `Some(None)` to clear).
    pub notes: Option<Option<String>>,

    /// Replacement dependency name list (if updating).
    pub dependencies: Option<Vec<String>>,
}

/// Remove duplicate dependency names while preserving first-seen order.
#[must_use]
pub(crate) fn dedup_dependencies(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
