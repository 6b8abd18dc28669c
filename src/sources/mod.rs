//! Network sources that resolve queries to paper records.
//!
//! The [`Source`] trait splits the two network-facing capabilities — resolve
//! a query to paper ids, resolve ids to summary records — so the pipeline can
//! run against a test double. [`PubMedClient`] is the real implementation;
//! [`MockSource`] backs the tests.

mod pubmed;

pub mod mock;

pub use mock::MockSource;
pub use pubmed::PubMedClient;

use async_trait::async_trait;

use crate::models::PaperRecord;

/// Interface for a paper source.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Search for papers matching `query`.
    ///
    /// Returns at most the configured cap of ids, in upstream order. An empty
    /// result means the query matched nothing and is not an error.
    async fn search(&self, query: &str) -> Result<Vec<String>, TransportError>;

    /// Fetch summary records for `ids`.
    ///
    /// Returns one record per id that resolved to a well-formed summary
    /// entry, preserving the relative order of `ids`; ids with missing or
    /// malformed entries are omitted. An empty `ids` slice returns an empty
    /// vec without any network traffic.
    async fn fetch_details(&self, ids: &[String]) -> Result<Vec<PaperRecord>, TransportError>;
}

/// Errors raised by a source while talking to its upstream.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Network or connection-level error
    #[error("network error: {0}")]
    Network(String),

    /// Upstream answered with a non-success HTTP status
    #[error("{endpoint} returned status {status}")]
    Status {
        /// Which endpoint failed ("esearch" or "esummary")
        endpoint: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response body could not be parsed
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Parse(format!("JSON: {}", err))
    }
}
