//! Render model derivation for the timeline chart layer.
//!
//! The chart layer draws pixels; this module decides what there is to
//! draw. From an ordered (possibly pre-filtered) entry slice it derives a
//! [`RenderModel`]: one bar per entry, grouped by phase in a deterministic
//! order, plus one arrow per resolvable dependency link. Building the
//! model never fails — unresolvable or degenerate dependency names are
//! dropped from the arrow list rather than reported, since they violate
//! no store invariant.

use crate::domain::Entry;
use chrono::NaiveDate;
use serde::Serialize;

/// One timeline bar, ready for plotting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    /// Row-axis label the bar is drawn on.
    pub phase: String,

    /// Milestone label shown on or beside the bar.
    pub milestone: String,

    /// First day of the bar (inclusive).
    pub start: NaiveDate,

    /// Last day of the bar (inclusive).
    pub end: NaiveDate,

    /// Fill color.
    pub color: String,

    /// Hover/detail text, if any.
    pub notes: Option<String>,
}

/// One dependency arrow between two timeline positions.
///
/// The arrow points from the end of the dependency's bar to the start of
/// the dependent's bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arrow {
    /// Phase row the arrow starts on.
    pub from_phase: String,

    /// Arrow tail position: the dependency's end date.
    pub from_point: NaiveDate,

    /// Phase row the arrow ends on.
    pub to_phase: String,

    /// Arrow head position: the dependent's start date.
    pub to_point: NaiveDate,
}

/// The derived {bars, arrows} structure consumed by the chart layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderModel {
    /// Timeline bars, grouped by phase in display order.
    pub bars: Vec<Bar>,

    /// Dependency arrows between bars.
    pub arrows: Vec<Arrow>,
}

/// Derive a render model from an ordered entry slice.
///
/// Phases are grouped in ascending order of total entry count, ties
/// broken by first appearance in the slice; within a phase, bars keep
/// slice order. The ordering is deterministic given identical input, so
/// identical tables always render identically.
///
/// Dependency names are resolved against the same slice: the first entry
/// (in slice order) whose milestone matches the name wins. A name whose
/// target was filtered out of the slice produces no arrow, and an entry
/// resolving to itself is skipped.
#[must_use]
pub fn build_render_model(entries: &[Entry]) -> RenderModel {
    let mut bars = Vec::with_capacity(entries.len());
    for phase in phase_display_order(entries) {
        for entry in entries.iter().filter(|entry| entry.phase == phase) {
            bars.push(Bar {
                phase: entry.phase.clone(),
                milestone: entry.milestone.clone(),
                start: entry.start,
                end: entry.end,
                color: entry.color.clone(),
                notes: entry.notes.clone(),
            });
        }
    }

    let mut arrows = Vec::new();
    for entry in entries {
        for name in &entry.dependencies {
            let Some(target) = entries
                .iter()
                .find(|candidate| candidate.milestone == *name)
            else {
                continue;
            };
            if target.id == entry.id {
                continue;
            }
            arrows.push(Arrow {
                from_phase: target.phase.clone(),
                from_point: target.end,
                to_phase: entry.phase.clone(),
                to_point: entry.start,
            });
        }
    }

    RenderModel { bars, arrows }
}

/// Phase labels in display order: total entry count ascending, ties by
/// first-seen order.
fn phase_display_order(entries: &[Entry]) -> Vec<String> {
    let mut phases: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        match phases.iter_mut().find(|(phase, _)| *phase == entry.phase) {
            Some((_, count)) => *count += 1,
            None => phases.push((entry.phase.clone(), 1)),
        }
    }

    // Stable sort preserves first-seen order among equal counts.
    phases.sort_by_key(|(_, count)| *count);
    phases.into_iter().map(|(phase, _)| phase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: &str, phase: &str, milestone: &str, start: NaiveDate, end: NaiveDate) -> Entry {
        Entry {
            id: EntryId::new(id),
            phase: phase.to_string(),
            milestone: milestone.to_string(),
            start,
            end,
            color: "#1f77b4".to_string(),
            notes: None,
            dependencies: Vec::new(),
        }
    }

    #[test]
    fn empty_input_yields_empty_model() {
        let model = build_render_model(&[]);
        assert!(model.bars.is_empty());
        assert!(model.arrows.is_empty());
    }

    #[test]
    fn bars_carry_entry_display_fields() {
        let mut e = entry("t-1", "Design", "Kickoff", date(2024, 1, 1), date(2024, 1, 10));
        e.notes = Some("first pass".to_string());

        let model = build_render_model(&[e]);
        assert_eq!(model.bars.len(), 1);

        let bar = &model.bars[0];
        assert_eq!(bar.phase, "Design");
        assert_eq!(bar.milestone, "Kickoff");
        assert_eq!(bar.color, "#1f77b4");
        assert_eq!(bar.notes.as_deref(), Some("first pass"));
    }

    #[test]
    fn phases_ordered_by_count_ascending_then_first_seen() {
        let entries = vec![
            entry("t-1", "Build", "Alpha", date(2024, 1, 1), date(2024, 1, 5)),
            entry("t-2", "Build", "Beta", date(2024, 2, 1), date(2024, 2, 5)),
            entry("t-3", "Design", "Kickoff", date(2024, 1, 1), date(2024, 1, 5)),
            entry("t-4", "Launch", "GA", date(2024, 3, 1), date(2024, 3, 5)),
        ];

        let model = build_render_model(&entries);
        let phases: Vec<&str> = model.bars.iter().map(|b| b.phase.as_str()).collect();

        // Design and Launch both have one entry; Design was seen first.
        assert_eq!(phases, vec!["Design", "Launch", "Build", "Build"]);
    }

    #[test]
    fn model_is_deterministic_for_identical_input() {
        let entries = vec![
            entry("t-1", "Design", "Kickoff", date(2024, 1, 1), date(2024, 1, 5)),
            entry("t-2", "Build", "Alpha", date(2024, 2, 1), date(2024, 2, 5)),
        ];

        assert_eq!(build_render_model(&entries), build_render_model(&entries));
    }

    #[test]
    fn resolved_dependency_produces_one_arrow() {
        let kickoff = entry("t-1", "Design", "Kickoff", date(2024, 1, 1), date(2024, 1, 10));
        let mut review = entry("t-2", "Design", "Review", date(2024, 1, 11), date(2024, 1, 15));
        review.dependencies.push("Kickoff".to_string());

        let model = build_render_model(&[kickoff, review]);
        assert_eq!(model.arrows.len(), 1);

        let arrow = &model.arrows[0];
        assert_eq!(arrow.from_phase, "Design");
        assert_eq!(arrow.from_point, date(2024, 1, 10));
        assert_eq!(arrow.to_phase, "Design");
        assert_eq!(arrow.to_point, date(2024, 1, 11));
    }

    #[test]
    fn unresolved_dependency_produces_no_arrow() {
        let mut review = entry("t-1", "Design", "Review", date(2024, 1, 11), date(2024, 1, 15));
        review.dependencies.push("Kickoff".to_string());

        let model = build_render_model(&[review]);
        assert!(model.arrows.is_empty());
        assert_eq!(model.bars.len(), 1);
    }

    #[test]
    fn ambiguous_name_resolves_to_first_match_in_slice_order() {
        let first = entry("t-1", "Design", "Kickoff", date(2024, 1, 1), date(2024, 1, 5));
        let second = entry("t-2", "Build", "Kickoff", date(2024, 2, 1), date(2024, 2, 5));
        let mut dependent = entry("t-3", "Launch", "GA", date(2024, 3, 1), date(2024, 3, 5));
        dependent.dependencies.push("Kickoff".to_string());

        let model = build_render_model(&[first, second, dependent]);
        assert_eq!(model.arrows.len(), 1);
        assert_eq!(model.arrows[0].from_phase, "Design");
        assert_eq!(model.arrows[0].from_point, date(2024, 1, 5));
    }

    #[test]
    fn self_referencing_dependency_is_skipped() {
        let mut e = entry("t-1", "Design", "Kickoff", date(2024, 1, 1), date(2024, 1, 5));
        e.dependencies.push("Kickoff".to_string());

        let model = build_render_model(&[e]);
        assert!(model.arrows.is_empty());
    }
}
