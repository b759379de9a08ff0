//! Library side of the `notes-prep` command line tool.

pub mod logging;
pub mod pipeline;
pub mod types;
