//! Note filtering and section extraction.
//!
//! This crate turns raw note rows into one canonical discharge summary per
//! admission:
//!
//! - **filter**: discharge summaries of non-newborn admissions with text
//! - **consolidate**: duplicate removal and report + addenda merging
//! - **sections**: pattern-based extraction of admission-time sections
//! - **reduce**: rebuild text from extracted sections
//! - **pipeline**: the stages above in order, with per-stage counts

pub mod consolidate;
pub mod filter;
pub mod pipeline;
pub mod reduce;
pub mod sections;

pub use consolidate::{consolidate_notes, remove_duplicate_texts};
pub use filter::filter_admissions;
pub use pipeline::{FilterCounts, FilterOutcome, filter_notes};
pub use reduce::reduce_to_admission_text;
pub use sections::extract_sections;
