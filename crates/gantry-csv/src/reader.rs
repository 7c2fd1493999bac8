//! CSV reading operations.
//!
//! This module reads headered CSV input into serde types row-by-row,
//! collecting per-row failures as [`Warning`]s instead of aborting the
//! whole read on the first malformed row.

use crate::error::Result;
use crate::warning::Warning;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Read all records from headered CSV bytes, tolerating malformed rows.
///
/// Returns the successfully deserialized records paired with their 1-based
/// record number (the header row is not counted), plus a warning for every
/// row that failed to deserialize. Record numbers are preserved across
/// skipped rows, so callers can report accurate row positions to users.
///
/// Columns are matched by header name; columns the target type does not
/// know about are ignored, and fields declared `Option` default to `None`
/// when their column is absent.
///
/// # Errors
///
/// Returns an error only when the input as a whole is unreadable (for
/// example, an invalid header row). Individual malformed rows never fail
/// the read; they are reported as [`Warning::MalformedRecord`].
///
/// # Examples
///
/// ```
/// use gantry_csv::read_csv_resilient;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct Row {
///     name: String,
///     count: u32,
/// }
///
/// let input = b"name,count\nalpha,3\nbeta,not-a-number\ngamma,7\n";
/// let (rows, warnings) = read_csv_resilient::<Row>(input).unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].0, 1);
/// assert_eq!(rows[1].0, 3);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(warnings[0].record_number(), 2);
/// ```
pub fn read_csv_resilient<T: DeserializeOwned>(
    bytes: &[u8],
) -> Result<(Vec<(usize, T)>, Vec<Warning>)> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (index, row) in reader.deserialize::<T>().enumerate() {
        let record_number = index + 1;
        match row {
            Ok(record) => records.push((record_number, record)),
            Err(error) => {
                warnings.push(Warning::MalformedRecord {
                    record_number,
                    error: error.to_string(),
                });
            }
        }
    }

    debug!(
        records = records.len(),
        warnings = warnings.len(),
        "finished resilient CSV read"
    );

    Ok((records, warnings))
}
