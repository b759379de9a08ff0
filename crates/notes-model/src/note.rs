//! Note and admission records.

use chrono::NaiveDate;

use crate::error::{ModelError, Result};
use crate::section::SectionSet;

/// A raw row of the note table.
///
/// `text` and `admission_id` may be absent in the source; such rows are
/// discarded by the admission filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    pub row_id: i64,
    pub subject_id: Option<i64>,
    pub admission_id: Option<i64>,
    pub chart_date: Option<NaiveDate>,
    pub category: String,
    pub description: String,
    pub text: Option<String>,
}

/// Admission type as recorded in the admission table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionType {
    Emergency,
    Elective,
    Urgent,
    Newborn,
    /// Any other non-empty value, kept verbatim.
    Other(String),
    /// Missing value.
    Unknown,
}

impl AdmissionType {
    /// Parse a raw `ADMISSION_TYPE` value. Matching is exact and
    /// case-sensitive after trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" => Self::Unknown,
            "EMERGENCY" => Self::Emergency,
            "ELECTIVE" => Self::Elective,
            "URGENT" => Self::Urgent,
            "NEWBORN" => Self::Newborn,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_newborn(&self) -> bool {
        matches!(self, Self::Newborn)
    }
}

/// A row of the admission table. Only used as a filter predicate source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionRecord {
    pub admission_id: i64,
    pub admission_type: AdmissionType,
}

/// A discharge summary that passed the admission filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DischargeNote {
    pub row_id: i64,
    pub subject_id: Option<i64>,
    pub admission_id: i64,
    pub chart_date: Option<NaiveDate>,
    pub description: String,
    pub text: String,
}

/// The single canonical note of an admission.
///
/// `text` holds the report joined with its addenda, or the rebuilt
/// admission-time text once sections have been attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidatedNote {
    pub admission_id: i64,
    pub subject_id: i64,
    /// Row id of the representative "Report" row.
    pub row_id: i64,
    pub chart_date: Option<NaiveDate>,
    pub text: String,
    pub sections: Option<SectionSet>,
}

/// Parse a `CHARTDATE` value.
///
/// Accepts `YYYY-MM-DD` and timestamps whose first ten characters are such a
/// date (`2151-08-04 00:00:00`).
pub fn parse_chart_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|source| {
        ModelError::InvalidChartDate {
            value: trimmed.to_string(),
            source,
        }
    })
}
