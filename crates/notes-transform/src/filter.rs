//! Admission filter.

use std::collections::HashSet;

use tracing::debug;

use notes_model::{AdmissionRecord, DischargeNote, NoteRecord};

/// Category of the notes kept by [`filter_admissions`]. Matched exactly.
pub const DISCHARGE_CATEGORY: &str = "Discharge summary";

/// Keep discharge summaries of non-newborn admissions that carry both an
/// admission id and text.
///
/// Notes whose admission id is absent from `admissions` are dropped, as are
/// notes of admissions typed `NEWBORN`.
pub fn filter_admissions(
    notes: Vec<NoteRecord>,
    admissions: &[AdmissionRecord],
) -> Vec<DischargeNote> {
    let adult_admissions: HashSet<i64> = admissions
        .iter()
        .filter(|admission| !admission.admission_type.is_newborn())
        .map(|admission| admission.admission_id)
        .collect();

    let input = notes.len();
    let kept: Vec<DischargeNote> = notes
        .into_iter()
        .filter_map(|note| {
            let admission_id = note.admission_id?;
            if !adult_admissions.contains(&admission_id) || note.category != DISCHARGE_CATEGORY {
                return None;
            }
            let text = note.text?;
            Some(DischargeNote {
                row_id: note.row_id,
                subject_id: note.subject_id,
                admission_id,
                chart_date: note.chart_date,
                description: note.description,
                text,
            })
        })
        .collect();

    debug!(
        input,
        kept = kept.len(),
        dropped = input - kept.len(),
        "admission filter"
    );
    kept
}
