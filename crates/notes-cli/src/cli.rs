//! CLI argument definitions for the note preparation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use notes_model::{FilterOptions, PrepareOptions, SplitOptions};

#[derive(Parser)]
#[command(
    name = "notes-prep",
    version,
    about = "Prepare MIMIC discharge summaries for patient-wise model training",
    long_about = "Filter MIMIC-III discharge summaries to one canonical note per admission,\n\
                  optionally reduce them to admission-time sections, and write\n\
                  patient-wise train/val/test splits as quoted CSV files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow note text in trace-level logs. Off by default because notes
    /// contain patient information.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter notes and write patient-wise splits.
    Prepare(PrepareArgs),

    /// List the sections recognised in admission-only mode.
    Sections,
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Directory containing NOTEEVENTS.csv and ADMISSIONS.csv.
    #[arg(long = "mimic-dir", value_name = "DIR")]
    pub mimic_dir: PathBuf,

    /// Output directory for the split files (created if absent).
    #[arg(long = "save-dir", value_name = "DIR")]
    pub save_dir: PathBuf,

    /// Reduce each note to the sections known at admission time.
    #[arg(long = "admission-only")]
    pub admission_only: bool,

    /// Seed for shuffling rows within each split.
    #[arg(long = "seed", default_value_t = 123)]
    pub seed: u64,

    /// Directory containing mimic_train.csv, mimic_val.csv and mimic_test.csv.
    #[arg(long = "splits-dir", value_name = "DIR", default_value = "tasks")]
    pub splits_dir: PathBuf,

    /// Output files are named <TASK_NAME>_<split>.csv.
    #[arg(long = "task-name", default_value = "discharge")]
    pub task_name: String,

    /// CSV with a HADM_ID column; every other column is a label.
    #[arg(long = "labels", value_name = "PATH")]
    pub labels: Option<PathBuf>,

    /// Label column appended to the default output columns.
    #[arg(long = "label-column", value_name = "NAME")]
    pub label_column: Option<String>,

    /// Output columns, comma separated (default: ID,TEXT plus the label column).
    #[arg(long = "columns", value_delimiter = ',', value_name = "COLUMNS")]
    pub columns: Option<Vec<String>>,

    /// Run every stage and report counts without writing split files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl PrepareArgs {
    pub fn to_options(&self) -> PrepareOptions {
        let columns = self
            .columns
            .clone()
            .unwrap_or_else(|| SplitOptions::default_columns(self.label_column.as_deref()));
        PrepareOptions {
            mimic_dir: self.mimic_dir.clone(),
            save_dir: self.save_dir.clone(),
            splits_dir: self.splits_dir.clone(),
            labels_path: self.labels.clone(),
            label_column: self.label_column.clone(),
            dry_run: self.dry_run,
            filter: FilterOptions {
                admission_only: self.admission_only,
            },
            split: SplitOptions::default()
                .with_task_name(self.task_name.clone())
                .with_seed(self.seed)
                .with_columns(columns),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_defaults() {
        let cli = Cli::parse_from([
            "notes-prep",
            "prepare",
            "--mimic-dir",
            "mimic",
            "--save-dir",
            "out",
        ]);
        let Command::Prepare(args) = cli.command else {
            panic!("expected prepare");
        };
        let options = args.to_options();
        assert_eq!(options.split.seed, 123);
        assert_eq!(options.split.columns, vec!["ID", "TEXT"]);
        assert_eq!(options.split.task_name, "discharge");
        assert_eq!(options.splits_dir, PathBuf::from("tasks"));
        assert!(!options.filter.admission_only);
        assert!(!options.dry_run);
    }

    #[test]
    fn label_column_extends_default_columns() {
        let cli = Cli::parse_from([
            "notes-prep",
            "prepare",
            "--mimic-dir",
            "mimic",
            "--save-dir",
            "out",
            "--admission-only",
            "--seed",
            "7",
            "--label-column",
            "LOS",
        ]);
        let Command::Prepare(args) = cli.command else {
            panic!("expected prepare");
        };
        let options = args.to_options();
        assert_eq!(options.split.columns, vec!["ID", "TEXT", "LOS"]);
        assert_eq!(options.split.seed, 7);
        assert!(options.filter.admission_only);
    }

    #[test]
    fn explicit_columns_are_split_on_commas() {
        let cli = Cli::parse_from([
            "notes-prep",
            "prepare",
            "--mimic-dir",
            "mimic",
            "--save-dir",
            "out",
            "--columns",
            "ID,CHIEF_COMPLAINT,TEXT",
        ]);
        let Command::Prepare(args) = cli.command else {
            panic!("expected prepare");
        };
        assert_eq!(
            args.to_options().split.columns,
            vec!["ID", "CHIEF_COMPLAINT", "TEXT"]
        );
    }
}
