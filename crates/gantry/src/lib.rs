//! Gantry - a roadmap planning core.
//!
//! This crate holds an in-memory table of roadmap entries (phase, milestone,
//! date range, color, notes, dependency links), enforces the invariants that
//! keep the table renderable (date ordering, per-phase overlap rejection,
//! duplicate detection), and derives a timeline-plus-arrows render model for
//! a chart layer to draw. Entries round-trip through CSV for export/import,
//! with every imported record re-validated the same way interactive inserts
//! are.

#![forbid(unsafe_code)]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod id_generation;
pub mod render;
pub mod serialize;
pub mod store;
pub mod validate;

pub use app::Roadmap;
pub use config::RoadmapConfig;
pub use error::{Error, Result};
