//! CSV writing operations.
//!
//! This module serializes serde types into headered CSV bytes. Fields
//! containing the delimiter, quotes, or newlines are quoted by the
//! underlying `csv` writer, so values round-trip through
//! [`read_csv_resilient`](crate::read_csv_resilient) unchanged.

use crate::error::{Error, Result};
use serde::Serialize;

/// Serialize records into headered CSV bytes.
///
/// The header row is derived from the record type's field names (honoring
/// serde renames) and written before the first record. An empty slice
/// produces empty output.
///
/// # Errors
///
/// Returns an error if a record fails to serialize.
///
/// # Examples
///
/// ```
/// use gantry_csv::write_csv;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Row {
///     name: String,
///     count: u32,
/// }
///
/// let rows = vec![Row { name: "alpha".to_string(), count: 3 }];
/// let bytes = write_csv(&rows).unwrap();
/// assert_eq!(bytes, b"name,count\nalpha,3\n");
/// ```
pub fn write_csv<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::InvalidFormat(e.to_string()))
}
