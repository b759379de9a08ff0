//! Section extraction from narrative note text.
//!
//! Each section is searched independently with its own pattern: a label
//! followed by a colon, then everything up to the next blank line or the end
//! of the text. A label directly followed by a blank line is empty, so
//! rebuilt text with empty sections extracts to the same values. Spans of different sections may overlap when labels are
//! ambiguous in the source; no exclusivity is enforced.

use std::sync::LazyLock;

use regex::Regex;

use notes_model::{Section, SectionSet};

static SECTION_PATTERNS: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    Section::ALL
        .into_iter()
        .map(|section| {
            let pattern = format!(
                r"(?ims){}:(?:[^\S\n]*(?:\n\n|\z)|\s*(.*?)(?:\n\n|\z))",
                regex::escape(section.source_label())
            );
            (section, Regex::new(&pattern).expect("valid section regex"))
        })
        .collect()
});

/// The ordered `(section, pattern)` pairs used by [`extract_sections`].
pub fn section_patterns() -> &'static [(Section, Regex)] {
    SECTION_PATTERNS.as_slice()
}

/// Extract the eight admission-time sections from `text`.
///
/// Only the first occurrence of each label is used. Sections whose label is
/// absent are empty strings.
pub fn extract_sections(text: &str) -> SectionSet {
    let mut sections = SectionSet::new();
    for (section, pattern) in section_patterns() {
        let value = pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map_or("", |m| m.as_str().trim());
        sections.insert(*section, value);
    }
    sections
}
