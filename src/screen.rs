//! Affiliation screening: decide which authors look non-academic.
//!
//! The rule is a pure, order-preserving filter over free-text affiliation
//! strings with no network access and no side effects.

use crate::models::Author;

/// Substrings that mark an affiliation as academic.
///
/// Matching is plain case-insensitive substring containment, not
/// word-boundary matching, so `lab` also fires inside words such as
/// "laboratory" or "collaboration". The keyword set and the matching
/// strategy are part of the report's visible contract; changing either
/// changes which authors get flagged.
pub const ACADEMIC_KEYWORDS: &[&str] = &["university", "college", "institute", "lab"];

/// An author flagged as non-academic, with the affiliation that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedAuthor {
    /// Author name as given, possibly absent
    pub name: Option<String>,
    /// Full affiliation text, unmodified
    pub affiliation: String,
}

/// Returns true if the affiliation text contains any academic keyword.
pub fn is_academic(affiliation: &str) -> bool {
    let lower = affiliation.to_lowercase();
    ACADEMIC_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Filter authors down to those with a non-academic affiliation.
///
/// Authors with an absent, empty, or whitespace-only affiliation are treated
/// as unknown and never flagged. Input order is preserved.
pub fn non_academic_authors(authors: &[Author]) -> Vec<FlaggedAuthor> {
    authors
        .iter()
        .filter_map(|author| {
            let affiliation = author.affiliation.as_deref()?;
            if affiliation.trim().is_empty() || is_academic(affiliation) {
                return None;
            }
            Some(FlaggedAuthor {
                name: author.name.clone(),
                affiliation: affiliation.to_string(),
            })
        })
        .collect()
}
