//! Data model for discharge-summary corpus preparation.
//!
//! Raw note and admission rows are converted into the typed records defined
//! here at the ingest boundary; every later stage consumes and returns owned
//! collections of these records.

pub mod error;
pub mod note;
pub mod options;
pub mod section;
pub mod split;

pub use error::{ModelError, Result};
pub use note::{
    AdmissionRecord, AdmissionType, ConsolidatedNote, DischargeNote, NoteRecord,
    parse_chart_date,
};
pub use options::{FilterOptions, PrepareOptions, SplitOptions};
pub use section::{Section, SectionSet};
pub use split::{Split, SplitAssignment};
