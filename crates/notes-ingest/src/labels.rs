//! Optional per-admission label tables.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::DataFrame;

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::records::{non_empty, parse_id, require_columns, string_column};

pub const LABELS_TABLE: &str = "LABELS";

/// Label values per admission id, keyed by label column name.
pub type LabelTable = BTreeMap<i64, BTreeMap<String, String>>;

/// Every column other than `HADM_ID` is a label. Rows without an admission
/// id are skipped; for repeated ids the last row wins.
pub fn labels_from_frame(df: &DataFrame) -> Result<LabelTable> {
    require_columns(df, LABELS_TABLE, &["HADM_ID"])?;
    let admission_ids = string_column(df, LABELS_TABLE, "HADM_ID")?;
    let label_names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .filter(|name| name != "HADM_ID")
        .collect();
    let mut label_columns = Vec::with_capacity(label_names.len());
    for name in &label_names {
        label_columns.push(string_column(df, LABELS_TABLE, name)?);
    }

    let mut table = LabelTable::new();
    for row in 0..df.height() {
        let Some(raw) = non_empty(admission_ids.get(row)) else {
            continue;
        };
        let admission_id = parse_id(raw).ok_or_else(|| IngestError::InvalidValue {
            table: LABELS_TABLE.to_string(),
            column: "HADM_ID".to_string(),
            row,
            value: raw.to_string(),
        })?;
        let labels = label_names
            .iter()
            .zip(&label_columns)
            .map(|(name, values)| (name.clone(), values.get(row).unwrap_or_default().to_string()))
            .collect();
        table.insert(admission_id, labels);
    }
    Ok(table)
}

pub fn load_label_table(path: &Path) -> Result<LabelTable> {
    let df = read_csv_table(path)?;
    labels_from_frame(&df)
}
