//! Conversion from source DataFrames to typed records.
//!
//! Required columns are checked up front so a schema mismatch fails before
//! any row is converted. Malformed cells are filtered, not fatal.

use polars::prelude::{DataFrame, DataType, StringChunked};
use tracing::debug;

use notes_model::{AdmissionRecord, AdmissionType, NoteRecord, parse_chart_date};

use crate::error::{IngestError, Result};

/// Table name used in error messages for the note table.
pub const NOTES_TABLE: &str = "NOTEEVENTS";
/// Table name used in error messages for the admission table.
pub const ADMISSIONS_TABLE: &str = "ADMISSIONS";

pub const NOTE_COLUMNS: [&str; 7] = [
    "ROW_ID",
    "SUBJECT_ID",
    "HADM_ID",
    "CHARTDATE",
    "CATEGORY",
    "DESCRIPTION",
    "TEXT",
];
pub const ADMISSION_COLUMNS: [&str; 2] = ["HADM_ID", "ADMISSION_TYPE"];

/// Fail with [`IngestError::MissingColumn`] for the first absent column.
pub fn require_columns(df: &DataFrame, table: &str, columns: &[&str]) -> Result<()> {
    let names = df.get_column_names();
    for column in columns {
        if !names.iter().any(|name| name.as_str() == *column) {
            return Err(IngestError::MissingColumn {
                table: table.to_string(),
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

/// A column of `df` viewed as strings, whatever its inferred type.
pub(crate) fn string_column(df: &DataFrame, table: &str, name: &str) -> Result<StringChunked> {
    let column = df.column(name).map_err(|_| IngestError::MissingColumn {
        table: table.to_string(),
        column: name.to_string(),
    })?;
    let cast = column.cast(&DataType::String)?;
    Ok(cast.str()?.clone())
}

/// Trimmed, non-empty cell content.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses an integer identifier. Accepts float renderings such as `"123.0"`
/// produced by upstream exports.
pub fn parse_id(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id);
    }
    let float = trimmed.parse::<f64>().ok()?;
    if float.fract() == 0.0 && float.is_finite() {
        Some(float as i64)
    } else {
        None
    }
}

/// Outcome of reading an optional identifier cell.
enum IdCell {
    Missing,
    Valid(i64),
    Malformed,
}

fn id_cell(value: Option<&str>) -> IdCell {
    match non_empty(value) {
        None => IdCell::Missing,
        Some(raw) => parse_id(raw).map_or(IdCell::Malformed, IdCell::Valid),
    }
}

/// Convert the raw note table into [`NoteRecord`]s.
///
/// Empty `TEXT` fields are read as missing text. Whitespace inside non-empty
/// text is preserved; duplicate detection later works on the full string.
///
/// Bad cells never fail the conversion. Rows with a missing or malformed
/// `ROW_ID`, or a malformed `SUBJECT_ID`/`HADM_ID`, are dropped; an
/// unparseable `CHARTDATE` reads as a missing date.
pub fn notes_from_frame(df: &DataFrame) -> Result<Vec<NoteRecord>> {
    require_columns(df, NOTES_TABLE, &NOTE_COLUMNS)?;

    let row_ids = string_column(df, NOTES_TABLE, "ROW_ID")?;
    let subject_ids = string_column(df, NOTES_TABLE, "SUBJECT_ID")?;
    let admission_ids = string_column(df, NOTES_TABLE, "HADM_ID")?;
    let chart_dates = string_column(df, NOTES_TABLE, "CHARTDATE")?;
    let categories = string_column(df, NOTES_TABLE, "CATEGORY")?;
    let descriptions = string_column(df, NOTES_TABLE, "DESCRIPTION")?;
    let texts = string_column(df, NOTES_TABLE, "TEXT")?;

    let mut records = Vec::with_capacity(df.height());
    let mut dropped = 0usize;
    let mut undated = 0usize;
    for row in 0..df.height() {
        let IdCell::Valid(row_id) = id_cell(row_ids.get(row)) else {
            dropped += 1;
            continue;
        };
        let subject_id = match id_cell(subject_ids.get(row)) {
            IdCell::Missing => None,
            IdCell::Valid(id) => Some(id),
            IdCell::Malformed => {
                dropped += 1;
                continue;
            }
        };
        let admission_id = match id_cell(admission_ids.get(row)) {
            IdCell::Missing => None,
            IdCell::Valid(id) => Some(id),
            IdCell::Malformed => {
                dropped += 1;
                continue;
            }
        };
        let chart_date = non_empty(chart_dates.get(row)).and_then(|raw| {
            let parsed = parse_chart_date(raw).ok();
            if parsed.is_none() {
                undated += 1;
            }
            parsed
        });
        records.push(NoteRecord {
            row_id,
            subject_id,
            admission_id,
            chart_date,
            category: categories.get(row).unwrap_or_default().to_string(),
            description: descriptions.get(row).unwrap_or_default().to_string(),
            text: texts
                .get(row)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
        });
    }
    if dropped > 0 || undated > 0 {
        debug!(table = NOTES_TABLE, dropped, undated, "malformed note cells");
    }
    Ok(records)
}

/// Convert the raw admission table into [`AdmissionRecord`]s. Rows without a
/// usable admission id cannot be referenced by any note and are skipped.
pub fn admissions_from_frame(df: &DataFrame) -> Result<Vec<AdmissionRecord>> {
    require_columns(df, ADMISSIONS_TABLE, &ADMISSION_COLUMNS)?;

    let admission_ids = string_column(df, ADMISSIONS_TABLE, "HADM_ID")?;
    let admission_types = string_column(df, ADMISSIONS_TABLE, "ADMISSION_TYPE")?;

    let mut records = Vec::with_capacity(df.height());
    let mut malformed = 0usize;
    for row in 0..df.height() {
        let admission_id = match id_cell(admission_ids.get(row)) {
            IdCell::Valid(id) => id,
            IdCell::Missing => continue,
            IdCell::Malformed => {
                malformed += 1;
                continue;
            }
        };
        records.push(AdmissionRecord {
            admission_id,
            admission_type: AdmissionType::parse(admission_types.get(row).unwrap_or_default()),
        });
    }
    if malformed > 0 {
        debug!(table = ADMISSIONS_TABLE, malformed, "malformed admission ids");
    }
    Ok(records)
}
