//! Patient-wise train/val/test splitting.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use notes_model::{Split, SplitAssignment, SplitOptions};

use crate::error::{OutputError, Result};
use crate::row::SplitRow;

/// One projected split, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTable {
    pub split: Split,
    /// Lower-cased output column names.
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SplitTable {
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }
}

/// Indices of `rows` whose patient belongs to `split`, shuffled with a fresh
/// RNG seeded from `seed`.
pub fn shuffled_members<R: SplitRow>(
    rows: &[R],
    assignment: &SplitAssignment,
    split: Split,
    seed: u64,
) -> Vec<usize> {
    let mut members: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| assignment.contains(split, row.subject_id()))
        .map(|(idx, _)| idx)
        .collect();
    let mut rng = StdRng::seed_from_u64(seed);
    members.shuffle(&mut rng);
    members
}

fn project<R: SplitRow>(row: &R, columns: &[String]) -> Result<Vec<String>> {
    columns
        .iter()
        .map(|column| {
            row.column_value(column)
                .ok_or_else(|| OutputError::UnknownColumn {
                    column: column.clone(),
                })
        })
        .collect()
}

/// Partition `rows` into train, val and test by patient.
///
/// Rows whose patient is in none of the reference sets are left out. The
/// requested columns are checked against the first row, so an unknown column
/// fails the call even when no row lands in a split.
pub fn split_patient_wise<R: SplitRow>(
    rows: &[R],
    assignment: &SplitAssignment,
    options: &SplitOptions,
) -> Result<Vec<SplitTable>> {
    if options.columns.is_empty() {
        return Err(OutputError::NoColumns);
    }
    if let Some(first) = rows.first() {
        project(first, &options.columns)?;
    }
    let columns: Vec<String> = options
        .columns
        .iter()
        .map(|column| column.trim().to_lowercase())
        .collect();

    let mut tables = Vec::with_capacity(Split::ALL.len());
    for split in Split::ALL {
        let members = shuffled_members(rows, assignment, split, options.seed);
        let projected = members
            .iter()
            .map(|idx| project(&rows[*idx], &options.columns))
            .collect::<Result<Vec<_>>>()?;
        debug!(split = %split, rows = projected.len(), "projected split");
        tables.push(SplitTable {
            split,
            columns: columns.clone(),
            rows: projected,
        });
    }

    // Overlapping reference sets put a row in more than one table.
    let assigned: usize = tables.iter().map(SplitTable::record_count).sum();
    let unassigned = rows
        .iter()
        .filter(|row| assignment.split_of(row.subject_id()).is_none())
        .count();
    info!(
        input = rows.len(),
        assigned,
        unassigned,
        "patient-wise split complete"
    );
    Ok(tables)
}
