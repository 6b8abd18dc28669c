//! Report rows projected from retrieved papers.

use serde::Serialize;

use crate::models::PaperRecord;
use crate::screen::FlaggedAuthor;

/// Placeholder rendered for any absent value in a report row.
pub const NOT_AVAILABLE: &str = "N/A";

/// One output record, one per successfully retrieved paper.
///
/// Immutable once constructed. The serde renames double as the CSV header
/// names, so serializing a row yields exactly the published column set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Paper id, passed through from the search result unmodified
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,

    /// Paper title, or `N/A` when absent
    #[serde(rename = "Title")]
    pub title: String,

    /// Publication date, or `N/A` when absent
    #[serde(rename = "Publication Date")]
    pub publication_date: String,

    /// Names of flagged authors joined with `", "`, or `N/A` when none
    #[serde(rename = "Non-academic Authors")]
    pub non_academic_authors: String,

    /// Affiliations of the same flagged authors, same join and `N/A` rule
    #[serde(rename = "Company Affiliations")]
    pub company_affiliations: String,

    /// Corresponding author email, or `N/A` when absent
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl ReportRow {
    /// Project one paper and its flagged author list into a report row.
    ///
    /// The two joined columns are computed independently from the same
    /// `flagged` slice; a missing author name renders as an empty string
    /// within the join.
    pub fn project(paper: &PaperRecord, flagged: &[FlaggedAuthor]) -> Self {
        Self {
            pubmed_id: paper.id.clone(),
            title: paper
                .title
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            publication_date: paper
                .pub_date
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            non_academic_authors: join_or_na(
                flagged.iter().map(|a| a.name.clone().unwrap_or_default()),
            ),
            company_affiliations: join_or_na(flagged.iter().map(|a| a.affiliation.clone())),
            corresponding_author_email: paper
                .corresponding_author_email
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// Join values with `", "`, collapsing an empty sequence to `N/A`.
fn join_or_na(values: impl Iterator<Item = String>) -> String {
    let parts: Vec<String> = values.collect();
    if parts.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        parts.join(", ")
    }
}
