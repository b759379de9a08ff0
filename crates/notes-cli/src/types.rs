use std::path::PathBuf;

use notes_model::Split;
use notes_transform::FilterCounts;

/// Outcome of the `prepare` command.
#[derive(Debug)]
pub struct PrepareResult {
    pub task_name: String,
    pub save_dir: PathBuf,
    pub admission_only: bool,
    pub dry_run: bool,
    pub counts: FilterCounts,
    /// Notes left after the label join; `None` without a label table.
    pub labeled: Option<usize>,
    pub splits: Vec<SplitSummary>,
}

#[derive(Debug)]
pub struct SplitSummary {
    pub split: Split,
    pub patients: usize,
    pub records: usize,
    /// `None` on a dry run.
    pub path: Option<PathBuf>,
}

impl PrepareResult {
    pub fn total_records(&self) -> usize {
        self.splits.iter().map(|summary| summary.records).sum()
    }
}
