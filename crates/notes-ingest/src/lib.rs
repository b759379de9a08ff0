//! Source table ingestion for discharge-note preparation.
//!
//! This crate reads the raw MIMIC note and admission tables, the reference
//! split tables, and optional label tables into Polars DataFrames and
//! converts them into the typed records of `notes-model`.
//!
//! # Features
//!
//! - **CSV Loading**: every column read as a string, empty fields as nulls
//! - **Schema Checks**: absent required columns fail before any conversion
//! - **Split Tables**: `mimic_{train,val,test}.csv` into a `SplitAssignment`
//! - **Labels**: optional per-admission label columns keyed by `HADM_ID`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use notes_ingest::{SplitTablePaths, load_mimic_tables, load_split_assignment};
//!
//! let tables = load_mimic_tables(Path::new("data/mimic-iii"))?;
//! let assignment = load_split_assignment(&SplitTablePaths::in_dir(Path::new("tasks")))?;
//! ```

mod csv;
mod error;
mod labels;
mod mimic;
mod records;
mod splits;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_table, validate_encoding};

// === Record Conversion ===
pub use records::{
    ADMISSION_COLUMNS, ADMISSIONS_TABLE, NOTE_COLUMNS, NOTES_TABLE, admissions_from_frame,
    notes_from_frame, parse_id, require_columns,
};

// === Source Tables ===
pub use mimic::{
    ADMISSIONS_FILE, MimicTables, NOTES_FILE, admissions_path, load_mimic_tables, notes_path,
};

// === Split Tables ===
pub use splits::{SplitTablePaths, load_split_assignment, subject_ids_from_frame};

// === Labels ===
pub use labels::{LABELS_TABLE, LabelTable, labels_from_frame, load_label_table};
