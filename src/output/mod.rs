//! Report rendering: CSV files and terminal tables.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use std::path::Path;

use crate::models::ReportRow;

/// Column headers, in report order.
const HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Authors",
    "Company Affiliations",
    "Corresponding Author Email",
];

/// Errors raised while producing the output artifact.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// CSV serialization or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write rows to `path` as UTF-8 CSV, header row included.
///
/// The file is created, written once, and closed before returning; a failure
/// at any point surfaces as [`OutputError`] with no partial-result salvage.
pub fn write_csv(path: &Path, rows: &[ReportRow]) -> Result<(), OutputError> {
    // The header is written explicitly so it also appears when there are no
    // rows; automatic headers from serialize are disabled to avoid doubling.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Render rows as a table on stdout.
pub fn print_table(rows: &[ReportRow]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS);

    for row in rows {
        table.add_row([
            row.pubmed_id.as_str(),
            row.title.as_str(),
            row.publication_date.as_str(),
            row.non_academic_authors.as_str(),
            row.company_affiliations.as_str(),
            row.corresponding_author_email.as_str(),
        ]);
    }

    println!("{table}");
}
