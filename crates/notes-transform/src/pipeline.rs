//! Stage driver for the note filtering pipeline.
//!
//! Stages run in order, each a pure function of the previous output:
//! 1. **Admission filter**: discharge summaries of non-newborn admissions
//! 2. **Consolidation**: one canonical note per admission
//! 3. **Admission text** (optional): reduce text to admission-time sections

use std::time::Instant;

use tracing::{info, info_span};

use notes_model::{AdmissionRecord, ConsolidatedNote, FilterOptions, NoteRecord};

use crate::consolidate::consolidate_notes;
use crate::filter::filter_admissions;
use crate::reduce::reduce_to_admission_text;

/// Row counts after each stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub raw_notes: usize,
    pub discharge_notes: usize,
    pub consolidated: usize,
    /// Present only when admission-only mode ran.
    pub admission_text: Option<usize>,
}

/// Result of [`filter_notes`].
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub notes: Vec<ConsolidatedNote>,
    pub counts: FilterCounts,
}

/// Run the filtering stages over the raw note and admission tables.
pub fn filter_notes(
    notes: Vec<NoteRecord>,
    admissions: &[AdmissionRecord],
    options: &FilterOptions,
) -> FilterOutcome {
    let mut counts = FilterCounts {
        raw_notes: notes.len(),
        ..FilterCounts::default()
    };

    let discharge = info_span!("admission_filter").in_scope(|| {
        let start = Instant::now();
        let kept = filter_admissions(notes, admissions);
        info!(
            notes = kept.len(),
            duration_ms = start.elapsed().as_millis(),
            "admission filter complete"
        );
        kept
    });
    counts.discharge_notes = discharge.len();

    let consolidated = info_span!("consolidate").in_scope(|| {
        let start = Instant::now();
        let consolidated = consolidate_notes(discharge);
        info!(
            admissions = consolidated.len(),
            duration_ms = start.elapsed().as_millis(),
            "consolidation complete"
        );
        consolidated
    });
    counts.consolidated = consolidated.len();

    let notes = if options.admission_only {
        let reduced = info_span!("admission_text").in_scope(|| {
            let start = Instant::now();
            let reduced = reduce_to_admission_text(consolidated);
            info!(
                admissions = reduced.len(),
                duration_ms = start.elapsed().as_millis(),
                "admission-text reduction complete"
            );
            reduced
        });
        counts.admission_text = Some(reduced.len());
        reduced
    } else {
        consolidated
    };

    FilterOutcome { notes, counts }
}
