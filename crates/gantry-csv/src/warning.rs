//! Warning types for non-fatal errors during CSV processing.
//!
//! When reading user-supplied CSV, it is usually desirable to keep loading
//! well-formed rows even when individual rows are malformed. The [`Warning`]
//! type represents those non-fatal failures so the caller can surface them
//! without losing the rest of the file.

/// A non-fatal warning that occurred while reading CSV records.
///
/// Each variant carries the 1-based record number (header row excluded)
/// where the problem occurred, so callers can point users at the exact row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A row could not be deserialized into the target record type.
    ///
    /// The row is skipped and reading continues with the next row.
    MalformedRecord {
        /// The 1-based record number where the error occurred.
        record_number: usize,
        /// A description of the deserialization error.
        error: String,
    },

    /// A row was skipped for a reason other than a deserialization failure.
    SkippedRecord {
        /// The 1-based record number that was skipped.
        record_number: usize,
        /// The reason the row was skipped.
        reason: String,
    },
}

impl Warning {
    /// Returns the record number associated with this warning.
    #[must_use]
    pub fn record_number(&self) -> usize {
        match self {
            Self::MalformedRecord { record_number, .. }
            | Self::SkippedRecord { record_number, .. } => *record_number,
        }
    }

    /// Returns a human-readable description of the warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantry_csv::Warning;
    ///
    /// let warning = Warning::MalformedRecord {
    ///     record_number: 5,
    ///     error: "invalid date".to_string(),
    /// };
    /// let desc = warning.description();
    /// assert!(desc.contains("record 5"));
    /// assert!(desc.contains("invalid date"));
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MalformedRecord {
                record_number,
                error,
            } => {
                format!("record {record_number}: malformed row: {error}")
            }
            Self::SkippedRecord {
                record_number,
                reason,
            } => {
                format!("record {record_number}: skipped: {reason}")
            }
        }
    }

    /// Returns a static string identifying the warning kind.
    ///
    /// Useful for programmatic filtering without matching on variants.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "malformed_record",
            Self::SkippedRecord { .. } => "skipped_record",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_stores_number_and_error() {
        let warning = Warning::MalformedRecord {
            record_number: 42,
            error: "unexpected field count".to_string(),
        };

        assert_eq!(warning.record_number(), 42);
        assert_eq!(warning.kind(), "malformed_record");
    }

    #[test]
    fn skipped_record_stores_number_and_reason() {
        let warning = Warning::SkippedRecord {
            record_number: 10,
            reason: "empty row".to_string(),
        };

        assert_eq!(warning.record_number(), 10);
        assert_eq!(warning.kind(), "skipped_record");
    }

    #[test]
    fn description_formats_malformed_record() {
        let warning = Warning::MalformedRecord {
            record_number: 5,
            error: "field `Start`: invalid date".to_string(),
        };

        let desc = warning.description();
        assert!(desc.contains("record 5"));
        assert!(desc.contains("malformed row"));
        assert!(desc.contains("invalid date"));
    }

    #[test]
    fn display_matches_description() {
        let warning = Warning::SkippedRecord {
            record_number: 1,
            reason: "test".to_string(),
        };

        assert_eq!(format!("{warning}"), warning.description());
    }
}
