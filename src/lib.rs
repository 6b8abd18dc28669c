//! # PubMed Screen
//!
//! Searches PubMed for papers matching a query and reports authors whose
//! listed affiliation does not look academic.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (PaperRecord, ReportRow)
//! - [`sources`]: PubMed E-utilities client behind the [`sources::Source`] trait
//! - [`screen`]: The affiliation classification heuristic
//! - [`output`]: CSV and terminal report rendering
//! - [`pipeline`]: End-to-end run orchestration
//! - [`config`]: Configuration management

pub mod config;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod screen;
pub mod sources;

// Re-export commonly used types
pub use models::{Author, PaperRecord, ReportRow};
pub use pipeline::{run, RunOutcome};
pub use sources::{PubMedClient, Source, TransportError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
