//! Quoted CSV output for split tables.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use notes_model::Split;

use crate::error::{OutputError, Result};
use crate::splitter::SplitTable;

/// `{save_dir}/{task_name}_{split}.csv`.
pub fn split_path(save_dir: &Path, task_name: &str, split: Split) -> PathBuf {
    save_dir.join(format!("{task_name}_{split}.csv"))
}

/// Write one table with every field quoted.
pub fn write_split_table(path: &Path, table: &SplitTable) -> Result<()> {
    let write_err = |source: csv::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)
        .map_err(write_err)?;
    writer.write_record(&table.columns).map_err(write_err)?;
    for row in &table.rows {
        writer.write_record(row).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|source| write_err(csv::Error::from(source)))?;
    Ok(())
}

/// Create `save_dir` if needed and write every table. Returns the written
/// paths in table order.
pub fn write_split_tables(
    tables: &[SplitTable],
    save_dir: &Path,
    task_name: &str,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(save_dir).map_err(|source| OutputError::CreateDir {
        path: save_dir.to_path_buf(),
        source,
    })?;
    let mut written = Vec::with_capacity(tables.len());
    for table in tables {
        let path = split_path(save_dir, task_name, table.split);
        write_split_table(&path, table)?;
        info!(
            split = %table.split,
            rows = table.record_count(),
            path = %path.display(),
            "wrote split"
        );
        written.push(path);
    }
    Ok(written)
}
