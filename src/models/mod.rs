//! Core data models for retrieved papers and report rows.

mod paper;
mod report;

pub use paper::{Author, PaperRecord};
pub use report::{ReportRow, NOT_AVAILABLE};
