//! Session facade consumed by the presentation layer.
//!
//! This module provides the [`Roadmap`] struct that owns the entry store
//! for one editing session and exposes the operations a UI needs: add,
//! edit, delete, filtered listing as a render model, and CSV
//! export/import. The UI passes validated primitive inputs in and gets
//! typed results or snapshots back; no store internals leak across this
//! boundary.
//!
//! # Example
//!
//! ```
//! use gantry::domain::NewEntry;
//! use gantry::{Roadmap, RoadmapConfig};
//! use chrono::NaiveDate;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut roadmap = Roadmap::new(RoadmapConfig::default());
//!
//!     roadmap
//!         .add_entry(NewEntry::new(
//!             "Design",
//!             "Kickoff",
//!             NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!             NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!         ))
//!         .await?;
//!
//!     let model = roadmap.list_entries(None).await?;
//!     assert_eq!(model.bars.len(), 1);
//!     Ok(())
//! }
//! ```

use crate::config::RoadmapConfig;
use crate::domain::{Entry, EntryId, EntryPatch, NewEntry};
use crate::error::{Error, Result};
use crate::filter::filter_entries;
use crate::render::{build_render_model, RenderModel};
use crate::serialize::{EntryRecord, ImportReport, RejectedRecord};
use crate::store::{new_in_memory_store, EntryStore};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// One roadmap editing session.
///
/// Owns the entry store (no ambient global state) and lives as long as
/// the session does. All mutation goes through the store's validation,
/// so a `Roadmap` can never hold an invariant-violating table.
pub struct Roadmap {
    /// The entry store (trait object for backend polymorphism).
    store: Box<dyn EntryStore>,

    /// Session configuration.
    config: RoadmapConfig,
}

impl std::fmt::Debug for Roadmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roadmap")
            .field("config", &self.config)
            .field("store", &"<dyn EntryStore>")
            .finish()
    }
}

impl Roadmap {
    /// Create a session backed by a fresh in-memory store.
    #[must_use]
    pub fn new(config: RoadmapConfig) -> Self {
        let store = new_in_memory_store(config.id_prefix.clone());
        Self { store, config }
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &RoadmapConfig {
        &self.config
    }

    /// Add a new entry.
    ///
    /// # Errors
    ///
    /// Returns the first failed validation check.
    pub async fn add_entry(&mut self, entry: NewEntry) -> Result<Entry> {
        self.store.insert(entry).await
    }

    /// Move an existing entry to a new date range.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntryNotFound` for an unknown ID, or a validation
    /// error if the new range is inverted or collides within the phase.
    pub async fn edit_entry_dates(
        &mut self,
        id: &EntryId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Entry> {
        let patch = EntryPatch {
            start: Some(start),
            end: Some(end),
            ..EntryPatch::default()
        };
        self.store.update(id, patch).await
    }

    /// Delete an entry by ID.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntryNotFound` for an unknown ID.
    pub async fn delete_entry(&mut self, id: &EntryId) -> Result<()> {
        self.store.delete(id).await
    }

    /// Insertion-ordered snapshot of all entries, for table display.
    ///
    /// # Errors
    ///
    /// Propagates store errors (none for the in-memory backend).
    pub async fn entries(&self) -> Result<Vec<Entry>> {
        self.store.all().await
    }

    /// Derive the render model for the (optionally filtered) table.
    ///
    /// The filter is a case-insensitive substring match on phase or
    /// milestone; dependency arrows are resolved against the filtered
    /// view, so hiding a dependency's target also hides its arrow.
    ///
    /// # Errors
    ///
    /// Propagates store errors (none for the in-memory backend).
    pub async fn list_entries(&self, query: Option<&str>) -> Result<RenderModel> {
        let snapshot = self.store.all().await?;
        let visible = match query {
            Some(query) => filter_entries(&snapshot, query),
            None => snapshot,
        };
        Ok(build_render_model(&visible))
    }

    /// Export all entries as CSV bytes.
    ///
    /// Columns: `Phase, Milestone, Start, End, Color, Notes,
    /// Dependencies`; dates as `YYYY-MM-DD`; internal IDs omitted.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCsv` if encoding fails.
    pub async fn export_csv(&self) -> Result<Vec<u8>> {
        let entries = self.store.all().await?;
        let records: Vec<EntryRecord> = entries.iter().map(EntryRecord::from_entry).collect();

        gantry_csv::write_csv(&records).map_err(|e| Error::InvalidCsv(e.to_string()))
    }

    /// Import entries from CSV bytes, appending to the current table.
    ///
    /// Every record is re-validated through the same engine as an
    /// interactive insert, in file order, and gets a fresh ID. Import is
    /// partial: records that pass are committed, records that fail are
    /// collected in the report with their record number and error, and
    /// never abort the rest of the file.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCsv` only when the input as a whole is
    /// unreadable; per-record failures land in the [`ImportReport`].
    pub async fn import_csv(&mut self, bytes: &[u8]) -> Result<ImportReport> {
        let (rows, warnings) = gantry_csv::read_csv_resilient::<EntryRecord>(bytes)
            .map_err(|e| Error::InvalidCsv(e.to_string()))?;

        let mut report = ImportReport::default();

        // Rows the CSV layer could not even deserialize (missing required
        // columns, field type mismatches) are rejected without fields.
        for warning in warnings {
            let record_number = warning.record_number();
            warn!(record = record_number, %warning, "rejected import record");
            report.rejected.push(RejectedRecord {
                record_number,
                phase: None,
                milestone: None,
                error: Error::MalformedRecord {
                    record_number,
                    reason: warning.description(),
                },
            });
        }

        for (record_number, record) in rows {
            let phase = record.phase.clone();
            let milestone = record.milestone.clone();

            let outcome = match record.into_candidate(record_number) {
                Ok(candidate) => self.store.insert(candidate).await,
                Err(error) => Err(error),
            };

            match outcome {
                Ok(entry) => report.created.push(entry),
                Err(error) => {
                    warn!(record = record_number, %error, "rejected import record");
                    report.rejected.push(RejectedRecord {
                        record_number,
                        phase: Some(phase),
                        milestone: Some(milestone),
                        error,
                    });
                }
            }
        }

        report.rejected.sort_by_key(|rejected| rejected.record_number);

        debug!(
            created = report.created.len(),
            rejected = report.rejected.len(),
            "finished CSV import"
        );

        Ok(report)
    }
}

impl Default for Roadmap {
    fn default() -> Self {
        Self::new(RoadmapConfig::default())
    }
}
