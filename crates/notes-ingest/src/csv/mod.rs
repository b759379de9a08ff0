//! CSV loading into Polars DataFrames.

mod reader;

pub use reader::{read_csv_table, validate_encoding};
