//! Paper metadata as retrieved from the PubMed summary endpoint.

use serde::Deserialize;

/// One author entry from a paper's summary record.
///
/// Both fields are optional: PubMed summary records routinely omit the
/// affiliation, and collective authorship entries can lack a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Author {
    /// Author name as listed on the paper, if present
    #[serde(default)]
    pub name: Option<String>,

    /// Free-text affiliation, if present
    #[serde(default)]
    pub affiliation: Option<String>,
}

impl Author {
    /// Create an author with both fields set; mainly a test convenience.
    pub fn new(name: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            affiliation: Some(affiliation.into()),
        }
    }
}

/// Metadata for one retrieved paper.
///
/// Built once from the summary payload and never mutated afterwards; the
/// pipeline projects it into a [`crate::models::ReportRow`] and discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperRecord {
    /// PubMed id the record was requested under
    pub id: String,

    /// Paper title, if present in the summary
    pub title: Option<String>,

    /// Publication date as reported by PubMed (free-form, e.g. "2024 Mar 5")
    pub pub_date: Option<String>,

    /// Authors in listing order
    pub authors: Vec<Author>,

    /// Corresponding author email, if the summary carries one
    pub corresponding_author_email: Option<String>,
}

impl PaperRecord {
    /// Create an empty record for the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
