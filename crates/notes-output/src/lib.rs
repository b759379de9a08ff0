//! Patient-wise dataset splitting and CSV output.
//!
//! Rows are assigned to train, val or test through an externally supplied
//! patient → split mapping, shuffled with a caller-supplied seed, projected
//! to the requested columns and written as all-fields-quoted CSV files named
//! `{task_name}_{split}.csv`.

mod error;
mod row;
mod splitter;
mod writer;

pub use error::{OutputError, Result};
pub use row::{LabeledNote, SplitRow, attach_labels};
pub use splitter::{SplitTable, shuffled_members, split_patient_wise};
pub use writer::{split_path, write_split_table, write_split_tables};

use std::path::{Path, PathBuf};

use notes_model::{SplitAssignment, SplitOptions};

/// Split `rows` and write the three tables under `save_dir`.
///
/// Nothing is written when projection fails.
pub fn save_split_patient_wise<R: SplitRow>(
    rows: &[R],
    assignment: &SplitAssignment,
    options: &SplitOptions,
    save_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let tables = split_patient_wise(rows, assignment, options)?;
    write_split_tables(&tables, save_dir, &options.task_name)
}
