//! Error types for split output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// A requested output column does not exist on the rows being split.
    #[error("unknown output column '{column}'")]
    UnknownColumn { column: String },

    /// No output columns were requested.
    #[error("no output columns requested")]
    NoColumns,

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
