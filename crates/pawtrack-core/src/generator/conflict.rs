//! Conflict checks between generated candidates and existing events.
//!
//! Pairwise O(n·m) scan. Fine for a booking form's worth of candidates
//! against one calendar window; not meant for bulk imports.

use serde::Serialize;

use super::GeneratedEvent;
use crate::event::{RawEvent, TimeSpan};
use crate::interval::spans_overlap;

/// Existing event a candidate runs into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictingEvent {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub generated: GeneratedEvent,
    pub existing: Vec<ConflictingEvent>,
}

/// Candidates overlapping at least one existing event, in input order.
pub fn detect_conflicts<E: TimeSpan>(existing: &[E], generated: &[GeneratedEvent]) -> Vec<GeneratedEvent> {
    generated
        .iter()
        .filter(|candidate| existing.iter().any(|event| spans_overlap(*candidate, event)))
        .cloned()
        .collect()
}

/// Like [`detect_conflicts`], naming the existing events each candidate hits.
pub fn conflict_report(existing: &[RawEvent], generated: &[GeneratedEvent]) -> Vec<Conflict> {
    let report: Vec<Conflict> = generated
        .iter()
        .filter_map(|candidate| {
            let hits: Vec<ConflictingEvent> = existing
                .iter()
                .filter(|event| spans_overlap(candidate, *event))
                .map(|event| ConflictingEvent {
                    id: event.id.clone(),
                    title: event.title.clone(),
                })
                .collect();
            (!hits.is_empty()).then(|| Conflict {
                generated: candidate.clone(),
                existing: hits,
            })
        })
        .collect();

    tracing::debug!(
        candidates = generated.len(),
        existing = existing.len(),
        conflicts = report.len(),
        "checked booking conflicts"
    );
    report
}
