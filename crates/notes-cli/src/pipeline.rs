//! The `prepare` pipeline: load, filter, split, write.
//!
//! Stages:
//! 1. **Ingest**: raw note and admission tables from the MIMIC directory
//! 2. **Filter**: one canonical discharge summary per admission
//! 3. **Labels** (optional): inner join with a per-admission label table
//! 4. **Split**: patient-wise train/val/test tables
//! 5. **Output**: quoted CSV files, skipped on a dry run

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail, ensure};
use tracing::{debug, info, info_span, trace};

use notes_ingest::{
    LabelTable, SplitTablePaths, load_label_table, load_mimic_tables, load_split_assignment,
};
use notes_model::{ConsolidatedNote, PrepareOptions, SplitAssignment};
use notes_output::{SplitRow, attach_labels, split_patient_wise, write_split_tables};
use notes_transform::filter_notes;

use crate::logging::redact_value;
use crate::types::{PrepareResult, SplitSummary};

/// Run the whole pipeline described by `options`.
pub fn run_prepare(options: &PrepareOptions) -> Result<PrepareResult> {
    let span = info_span!("prepare", task = %options.split.task_name);
    let _guard = span.enter();
    let start = Instant::now();

    let tables = info_span!("ingest").in_scope(|| {
        load_mimic_tables(&options.mimic_dir).with_context(|| {
            format!("load MIMIC tables from {}", options.mimic_dir.display())
        })
    })?;

    let outcome = filter_notes(tables.notes, &tables.admissions, &options.filter);
    trace_notes(&outcome.notes);

    let assignment = load_split_assignment(&SplitTablePaths::in_dir(&options.splits_dir))
        .with_context(|| {
            format!(
                "load split tables from {}",
                options.splits_dir.display()
            )
        })?;

    let (labeled, splits) = match &options.labels_path {
        Some(path) => {
            let labels = load_label_table(path)
                .with_context(|| format!("load label table {}", path.display()))?;
            if let Some(column) = &options.label_column {
                ensure!(
                    has_label_column(&labels, column),
                    "label table {} has no column '{column}'",
                    path.display()
                );
            }
            let consolidated = outcome.notes.len();
            let rows = attach_labels(outcome.notes, &labels);
            debug!(
                dropped = consolidated - rows.len(),
                "notes without labels dropped"
            );
            (Some(rows.len()), split_and_write(&rows, &assignment, options)?)
        }
        None => {
            if let Some(column) = &options.label_column {
                bail!("label column '{column}' requires a label table");
            }
            (None, split_and_write(&outcome.notes, &assignment, options)?)
        }
    };

    info!(
        records = splits.iter().map(|summary| summary.records).sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "prepare complete"
    );

    Ok(PrepareResult {
        task_name: options.split.task_name.clone(),
        save_dir: options.save_dir.clone(),
        admission_only: options.filter.admission_only,
        dry_run: options.dry_run,
        counts: outcome.counts,
        labeled,
        splits,
    })
}

fn split_and_write<R: SplitRow>(
    rows: &[R],
    assignment: &SplitAssignment,
    options: &PrepareOptions,
) -> Result<Vec<SplitSummary>> {
    let tables = info_span!("split")
        .in_scope(|| split_patient_wise(rows, assignment, &options.split))
        .context("split notes by patient")?;

    let paths: Vec<Option<PathBuf>> = if options.dry_run {
        info!("dry run, no files written");
        vec![None; tables.len()]
    } else {
        info_span!("output")
            .in_scope(|| {
                write_split_tables(&tables, &options.save_dir, &options.split.task_name)
            })
            .with_context(|| format!("write splits to {}", options.save_dir.display()))?
            .into_iter()
            .map(Some)
            .collect()
    };

    Ok(tables
        .iter()
        .zip(paths)
        .map(|(table, path)| SplitSummary {
            split: table.split,
            patients: assignment.patient_count(table.split),
            records: table.record_count(),
            path,
        })
        .collect())
}

/// Every labeled admission carries the column (ASCII case-insensitive).
fn has_label_column(labels: &LabelTable, column: &str) -> bool {
    labels
        .values()
        .all(|row| row.keys().any(|name| name.eq_ignore_ascii_case(column.trim())))
}

fn trace_notes(notes: &[ConsolidatedNote]) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    for note in notes {
        trace!(
            admission_id = note.admission_id,
            subject_id = note.subject_id,
            text = redact_value(&note.text),
            "consolidated note"
        );
    }
}
