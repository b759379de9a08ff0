//! Note consolidation: one canonical note per admission.
//!
//! Raw discharge summaries come as an original report plus zero or more
//! addenda. Consolidation removes duplicated texts, joins what remains per
//! admission in chronological order, and takes ids and dates from the latest
//! row described as `Report`.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use notes_model::{ConsolidatedNote, DischargeNote};

/// Description of the primary report row of an admission. Matched exactly.
pub const REPORT_DESCRIPTION: &str = "Report";

/// Separator placed between the texts of one admission.
pub const TEXT_SEPARATOR: &str = "\n\n";

/// Chronological order: chart date ascending with missing dates last, ties
/// broken by row id.
pub fn chronological(a: &DischargeNote, b: &DischargeNote) -> Ordering {
    let by_date = match (a.chart_date, b.chart_date) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then(a.row_id.cmp(&b.row_id))
}

/// Drop rows whose text repeats the text of a chronologically later row.
///
/// Expects `notes` in chronological order and preserves it.
pub fn remove_duplicate_texts(notes: Vec<DischargeNote>) -> Vec<DischargeNote> {
    let mut keep = vec![false; notes.len()];
    {
        let mut seen: HashSet<&str> = HashSet::with_capacity(notes.len());
        for (idx, note) in notes.iter().enumerate().rev() {
            keep[idx] = seen.insert(note.text.as_str());
        }
    }
    notes
        .into_iter()
        .zip(keep)
        .filter_map(|(note, keep)| keep.then_some(note))
        .collect()
}

/// Collapse discharge notes into one [`ConsolidatedNote`] per admission.
///
/// Admissions without a `Report` row are dropped, as are results lacking a
/// subject id or whose text is empty after trimming. Output is ordered by
/// admission id.
pub fn consolidate_notes(mut notes: Vec<DischargeNote>) -> Vec<ConsolidatedNote> {
    let input = notes.len();
    notes.sort_by(chronological);
    let notes = remove_duplicate_texts(notes);
    let duplicates = input - notes.len();

    let mut texts: BTreeMap<i64, Vec<&str>> = BTreeMap::new();
    let mut reports: BTreeMap<i64, &DischargeNote> = BTreeMap::new();
    for note in &notes {
        texts
            .entry(note.admission_id)
            .or_default()
            .push(note.text.as_str());
        if note.description == REPORT_DESCRIPTION {
            // later rows overwrite earlier ones
            reports.insert(note.admission_id, note);
        }
    }

    let admissions = texts.len();
    let consolidated: Vec<ConsolidatedNote> = texts
        .into_iter()
        .filter_map(|(admission_id, parts)| {
            let report = reports.get(&admission_id)?;
            let subject_id = report.subject_id?;
            let text = parts.join(TEXT_SEPARATOR).trim().to_string();
            if text.is_empty() {
                return None;
            }
            Some(ConsolidatedNote {
                admission_id,
                subject_id,
                row_id: report.row_id,
                chart_date: report.chart_date,
                text,
                sections: None,
            })
        })
        .collect();

    debug!(
        input,
        duplicates,
        admissions,
        dropped = admissions - consolidated.len(),
        consolidated = consolidated.len(),
        "note consolidation"
    );
    consolidated
}
