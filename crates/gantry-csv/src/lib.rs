//! Resilient CSV record reading and writing for serde types.
//!
//! This library provides encode/decode helpers for flat CSV records where
//! a single malformed row should not abort the whole read. Malformed rows
//! are collected as [`Warning`]s while well-formed rows continue to load.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod warning;
pub mod writer;

pub use error::{Error, Result};
pub use reader::read_csv_resilient;
pub use warning::Warning;
pub use writer::write_csv;
