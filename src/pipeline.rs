//! End-to-end run orchestration: search, fetch, screen, project, emit.

use std::path::{Path, PathBuf};

use crate::models::ReportRow;
use crate::output::{self, OutputError};
use crate::screen;
use crate::sources::{Source, TransportError};

/// Top-level error for a run. Both variants are fatal; there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A network call failed or returned an unusable body
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The output file could not be written
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// What a completed run produced.
#[derive(Debug)]
pub enum RunOutcome {
    /// The search matched nothing; no report was produced and no file was
    /// touched.
    NoMatches,

    /// A report was produced, optionally saved to a file.
    Report {
        /// One row per successfully retrieved paper, in search-result order
        rows: Vec<ReportRow>,
        /// Where the CSV was written, when a file was requested
        saved_to: Option<PathBuf>,
    },
}

/// Execute one full run against `source`.
///
/// Searches for `query`, fetches summaries for the matched ids in one batched
/// call, flags non-academic authors per paper, and projects one row per
/// retrieved paper. When `file` is given the rows are written there as CSV.
pub async fn run(
    source: &dyn Source,
    query: &str,
    file: Option<&Path>,
) -> Result<RunOutcome, Error> {
    let ids = source.search(query).await?;
    if ids.is_empty() {
        tracing::info!("search matched no papers");
        return Ok(RunOutcome::NoMatches);
    }

    tracing::info!(count = ids.len(), "fetching paper summaries");
    let papers = source.fetch_details(&ids).await?;

    let rows: Vec<ReportRow> = papers
        .iter()
        .map(|paper| {
            let flagged = screen::non_academic_authors(&paper.authors);
            ReportRow::project(paper, &flagged)
        })
        .collect();

    let saved_to = match file {
        Some(path) => {
            output::write_csv(path, &rows)?;
            tracing::info!(path = %path.display(), rows = rows.len(), "report written");
            Some(path.to_path_buf())
        }
        None => None,
    };

    Ok(RunOutcome::Report { rows, saved_to })
}
