//! Reference patient → split tables.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::info;

use notes_model::{Split, SplitAssignment};

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::records::{non_empty, parse_id, require_columns, string_column};

/// Locations of the three reference split tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTablePaths {
    pub train: PathBuf,
    pub val: PathBuf,
    pub test: PathBuf,
}

impl SplitTablePaths {
    /// `mimic_train.csv`, `mimic_val.csv` and `mimic_test.csv` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let path = |split: Split| dir.join(format!("mimic_{split}.csv"));
        Self {
            train: path(Split::Train),
            val: path(Split::Val),
            test: path(Split::Test),
        }
    }

    pub fn path(&self, split: Split) -> &Path {
        match split {
            Split::Train => &self.train,
            Split::Val => &self.val,
            Split::Test => &self.test,
        }
    }
}

/// Patient ids listed in a reference table. Blank ids are skipped.
pub fn subject_ids_from_frame(df: &DataFrame, table: &str) -> Result<Vec<i64>> {
    require_columns(df, table, &["SUBJECT_ID"])?;
    let values = string_column(df, table, "SUBJECT_ID")?;
    let mut ids = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let Some(raw) = non_empty(values.get(row)) else {
            continue;
        };
        let id = parse_id(raw).ok_or_else(|| IngestError::InvalidValue {
            table: table.to_string(),
            column: "SUBJECT_ID".to_string(),
            row,
            value: raw.to_string(),
        })?;
        ids.push(id);
    }
    Ok(ids)
}

/// Load the three reference tables into a [`SplitAssignment`].
pub fn load_split_assignment(paths: &SplitTablePaths) -> Result<SplitAssignment> {
    let mut loaded = Vec::with_capacity(Split::ALL.len());
    for split in Split::ALL {
        let path = paths.path(split);
        let df = read_csv_table(path)?;
        let table = path.display().to_string();
        loaded.push(subject_ids_from_frame(&df, &table)?);
    }
    let test = loaded.pop().unwrap_or_default();
    let val = loaded.pop().unwrap_or_default();
    let train = loaded.pop().unwrap_or_default();
    let assignment = SplitAssignment::new(train, val, test);
    info!(
        train = assignment.patient_count(Split::Train),
        val = assignment.patient_count(Split::Val),
        test = assignment.patient_count(Split::Test),
        "loaded split assignment"
    );
    Ok(assignment)
}
