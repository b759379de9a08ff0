//! Row access for the splitter.

use std::collections::BTreeMap;

use notes_model::{ConsolidatedNote, Section};

/// A record that can be assigned to a split and projected to named columns.
pub trait SplitRow {
    /// Patient identity used for split membership.
    fn subject_id(&self) -> i64;

    /// Value of `column` (ASCII case-insensitive), or `None` if the row has
    /// no such column.
    fn column_value(&self, column: &str) -> Option<String>;
}

impl SplitRow for ConsolidatedNote {
    fn subject_id(&self) -> i64 {
        self.subject_id
    }

    /// `ID` is the admission id. Section columns exist only once sections
    /// have been attached.
    fn column_value(&self, column: &str) -> Option<String> {
        let name = column.trim().to_ascii_uppercase();
        match name.as_str() {
            "ID" => Some(self.admission_id.to_string()),
            "ROW_ID" => Some(self.row_id.to_string()),
            "SUBJECT_ID" => Some(self.subject_id.to_string()),
            "CHARTDATE" => Some(
                self.chart_date
                    .map(|date| date.to_string())
                    .unwrap_or_default(),
            ),
            "TEXT" => Some(self.text.clone()),
            other => {
                let section: Section = other.parse().ok()?;
                self.sections
                    .as_ref()
                    .map(|sections| sections.get(section).to_string())
            }
        }
    }
}

/// A consolidated note with label columns attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledNote {
    pub note: ConsolidatedNote,
    pub labels: BTreeMap<String, String>,
}

impl SplitRow for LabeledNote {
    fn subject_id(&self) -> i64 {
        self.note.subject_id
    }

    /// Note columns take precedence over labels of the same name.
    fn column_value(&self, column: &str) -> Option<String> {
        self.note.column_value(column).or_else(|| {
            let wanted = column.trim();
            self.labels
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
                .map(|(_, value)| value.clone())
        })
    }
}

/// Attach labels by admission id. Notes without labels are dropped.
pub fn attach_labels(
    notes: Vec<ConsolidatedNote>,
    labels: &BTreeMap<i64, BTreeMap<String, String>>,
) -> Vec<LabeledNote> {
    notes
        .into_iter()
        .filter_map(|note| {
            let labels = labels.get(&note.admission_id)?.clone();
            Some(LabeledNote { note, labels })
        })
        .collect()
}
