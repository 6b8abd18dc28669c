//! Mock source for testing purposes.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::PaperRecord;
use crate::sources::{Source, TransportError};

/// A mock source that returns predefined ids and records.
#[derive(Debug, Default)]
pub struct MockSource {
    ids: Mutex<Vec<String>>,
    records: Mutex<Vec<PaperRecord>>,
}

impl MockSource {
    /// Create a new mock source with empty responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ids returned by `search`.
    pub fn set_ids<I>(&self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut guard = self.ids.lock().unwrap();
        *guard = ids.into_iter().map(Into::into).collect();
    }

    /// Set the records returned by `fetch_details`.
    pub fn set_records(&self, records: Vec<PaperRecord>) {
        let mut guard = self.records.lock().unwrap();
        *guard = records;
    }
}

#[async_trait]
impl Source for MockSource {
    async fn search(&self, _query: &str) -> Result<Vec<String>, TransportError> {
        Ok(self.ids.lock().unwrap().clone())
    }

    async fn fetch_details(&self, ids: &[String]) -> Result<Vec<PaperRecord>, TransportError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.records.lock().unwrap().clone())
    }
}

/// Helper function to create a paper record for testing.
pub fn make_paper(id: &str, title: &str) -> PaperRecord {
    PaperRecord {
        id: id.to_string(),
        title: Some(title.to_string()),
        pub_date: Some("2024".to_string()),
        authors: Vec::new(),
        corresponding_author_email: None,
    }
}
