//! Loading of the raw note and admission tables from a MIMIC directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use notes_model::{AdmissionRecord, NoteRecord};

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::records::{admissions_from_frame, notes_from_frame};

pub const NOTES_FILE: &str = "NOTEEVENTS.csv";
pub const ADMISSIONS_FILE: &str = "ADMISSIONS.csv";

/// Raw tables consumed by the filtering pipeline.
#[derive(Debug, Clone, Default)]
pub struct MimicTables {
    pub notes: Vec<NoteRecord>,
    pub admissions: Vec<AdmissionRecord>,
}

pub fn notes_path(mimic_dir: &Path) -> PathBuf {
    mimic_dir.join(NOTES_FILE)
}

pub fn admissions_path(mimic_dir: &Path) -> PathBuf {
    mimic_dir.join(ADMISSIONS_FILE)
}

/// Read `NOTEEVENTS.csv` and `ADMISSIONS.csv` from `mimic_dir`.
pub fn load_mimic_tables(mimic_dir: &Path) -> Result<MimicTables> {
    if !mimic_dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: mimic_dir.to_path_buf(),
        });
    }
    let start = Instant::now();

    let admissions = admissions_from_frame(&read_csv_table(&admissions_path(mimic_dir))?)?;
    let notes = notes_from_frame(&read_csv_table(&notes_path(mimic_dir))?)?;

    info!(
        notes = notes.len(),
        admissions = admissions.len(),
        duration_ms = start.elapsed().as_millis(),
        "loaded source tables"
    );
    Ok(MimicTables { notes, admissions })
}
