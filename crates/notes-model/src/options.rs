//! Configuration for corpus preparation.
//!
//! Every default lives in a `Default` impl so callers see one place where the
//! behavior is fixed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the note filtering stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Replace each note's text with its admission-time sections and drop
    /// notes that lack all admission-indicative sections.
    ///
    /// Default: false.
    pub admission_only: bool,
}

/// Options for the patient-wise splitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Output files are named `{task_name}_{split}.csv`.
    ///
    /// Default: `"discharge"`.
    pub task_name: String,

    /// Seed for the per-split row shuffle.
    ///
    /// Default: 123.
    pub seed: u64,

    /// Columns to keep, in output order. Names are matched case-insensitively
    /// and written lower-cased.
    ///
    /// Default: `["ID", "TEXT"]`.
    pub columns: Vec<String>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            task_name: "discharge".to_string(),
            seed: 123,
            columns: Self::default_columns(None),
        }
    }
}

impl SplitOptions {
    /// `ID`, `TEXT`, and the label column when one is given.
    pub fn default_columns(label_column: Option<&str>) -> Vec<String> {
        let mut columns = vec!["ID".to_string(), "TEXT".to_string()];
        if let Some(label) = label_column {
            columns.push(label.to_string());
        }
        columns
    }

    pub fn with_task_name(mut self, task_name: impl Into<String>) -> Self {
        self.task_name = task_name.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }
}

/// Full configuration of one preparation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareOptions {
    /// Directory containing `NOTEEVENTS.csv` and `ADMISSIONS.csv`.
    pub mimic_dir: PathBuf,

    /// Output directory, created when absent.
    pub save_dir: PathBuf,

    /// Directory containing `mimic_train.csv`, `mimic_val.csv` and
    /// `mimic_test.csv`.
    ///
    /// Default: `tasks` (relative to the working directory).
    pub splits_dir: PathBuf,

    /// Optional label table keyed by `HADM_ID`.
    pub labels_path: Option<PathBuf>,

    /// Label column appended to the default column list. Must be present in
    /// the label table at `labels_path`.
    pub label_column: Option<String>,

    /// Run every stage but skip writing the split files.
    pub dry_run: bool,

    pub filter: FilterOptions,
    pub split: SplitOptions,
}

impl PrepareOptions {
    pub fn new(mimic_dir: impl Into<PathBuf>, save_dir: impl Into<PathBuf>) -> Self {
        Self {
            mimic_dir: mimic_dir.into(),
            save_dir: save_dir.into(),
            splits_dir: PathBuf::from("tasks"),
            labels_path: None,
            label_column: None,
            dry_run: false,
            filter: FilterOptions::default(),
            split: SplitOptions::default(),
        }
    }
}
