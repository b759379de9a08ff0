//! Admission-text reduction.

use tracing::debug;

use notes_model::ConsolidatedNote;

use crate::sections::extract_sections;

/// Replace each note's text with its admission-time sections.
///
/// Notes in which chief complaint, present illness and medical history are
/// all empty are dropped. Survivors carry their [`notes_model::SectionSet`]
/// and a text rebuilt from it.
pub fn reduce_to_admission_text(notes: Vec<ConsolidatedNote>) -> Vec<ConsolidatedNote> {
    let input = notes.len();
    let reduced: Vec<ConsolidatedNote> = notes
        .into_iter()
        .filter_map(|mut note| {
            let sections = extract_sections(&note.text);
            if !sections.describes_admission() {
                return None;
            }
            note.text = sections.render();
            note.sections = Some(sections);
            Some(note)
        })
        .collect();

    debug!(
        input,
        kept = reduced.len(),
        dropped = input - reduced.len(),
        "admission-text reduction"
    );
    reduced
}
