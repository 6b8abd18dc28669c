//! PubMed client using the NCBI E-utilities JSON API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::EndpointConfig;
use crate::models::{Author, PaperRecord};
use crate::sources::{Source, TransportError};

/// Client for the PubMed esearch and esummary endpoints.
///
/// Each run makes at most two requests: one search and one batched summary
/// fetch with comma-joined ids.
#[derive(Debug, Clone)]
pub struct PubMedClient {
    client: reqwest::Client,
    endpoints: EndpointConfig,
}

impl PubMedClient {
    /// Create a client against the default NCBI endpoints.
    pub fn new() -> Self {
        Self::with_endpoints(EndpointConfig::default())
    }

    /// Create a client against custom endpoints.
    ///
    /// Tests use this to point the client at a local HTTP double.
    pub fn with_endpoints(endpoints: EndpointConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, endpoints }
    }

    /// GET `url` with `params`, returning the body or a transport error on a
    /// non-success status.
    async fn get_text(
        &self,
        endpoint: &str,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Parse an esearch response body into a list of paper ids.
    ///
    /// A body without the `esearchresult.idlist` path yields an empty list;
    /// only an unparseable body is an error.
    fn parse_search_body(body: &str) -> Result<Vec<String>, TransportError> {
        #[derive(Debug, Deserialize)]
        struct ESearchResponse {
            #[serde(default)]
            esearchresult: Option<ESearchResult>,
        }

        #[derive(Debug, Deserialize)]
        struct ESearchResult {
            #[serde(default)]
            idlist: Vec<String>,
        }

        let response: ESearchResponse = serde_json::from_str(body)?;
        Ok(response
            .esearchresult
            .map(|result| result.idlist)
            .unwrap_or_default())
    }

    /// Parse an esummary response body into records for the requested ids.
    ///
    /// Entries are looked up under `result.<id>` in the order of `ids`; ids
    /// whose entry is absent, not an object, or otherwise malformed are
    /// skipped. Only an unparseable top-level body is an error.
    fn parse_summary_body(body: &str, ids: &[String]) -> Result<Vec<PaperRecord>, TransportError> {
        #[derive(Debug, Deserialize)]
        struct SummaryDoc {
            #[serde(default)]
            title: Option<String>,
            #[serde(default)]
            pubdate: Option<String>,
            #[serde(default)]
            authors: Vec<Author>,
            // Not populated by observed esummary payloads, but kept so the
            // report column fills in if it ever appears.
            #[serde(default)]
            corresponding_author: Option<String>,
        }

        let body: Value = serde_json::from_str(body)?;
        let result = body.get("result");

        let mut papers = Vec::new();
        for id in ids {
            let Some(entry) = result.and_then(|r| r.get(id)) else {
                tracing::debug!("no summary entry for id {id}");
                continue;
            };
            if !entry.is_object() {
                tracing::debug!("skipping non-object summary entry for id {id}");
                continue;
            }
            match serde_json::from_value::<SummaryDoc>(entry.clone()) {
                Ok(doc) => papers.push(PaperRecord {
                    id: id.clone(),
                    title: doc.title,
                    pub_date: doc.pubdate,
                    authors: doc.authors,
                    corresponding_author_email: doc.corresponding_author,
                }),
                Err(err) => {
                    tracing::debug!("skipping malformed summary entry for id {id}: {err}");
                }
            }
        }

        Ok(papers)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Source for PubMedClient {
    async fn search(&self, query: &str) -> Result<Vec<String>, TransportError> {
        let retmax = self.endpoints.max_results.to_string();
        let params = [
            ("db", "pubmed"),
            ("term", query),
            ("retmax", retmax.as_str()),
            ("retmode", "json"),
        ];

        tracing::debug!(url = %self.endpoints.esearch_url, query, "searching PubMed");
        let body = self
            .get_text("esearch", &self.endpoints.esearch_url, &params)
            .await?;

        let ids = Self::parse_search_body(&body)?;
        tracing::debug!(count = ids.len(), "search returned ids");
        Ok(ids)
    }

    async fn fetch_details(&self, ids: &[String]) -> Result<Vec<PaperRecord>, TransportError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids.join(",");
        let params = [
            ("db", "pubmed"),
            ("id", joined.as_str()),
            ("retmode", "json"),
        ];

        tracing::debug!(url = %self.endpoints.esummary_url, count = ids.len(), "fetching summaries");
        let body = self
            .get_text("esummary", &self.endpoints.esummary_url, &params)
            .await?;

        Self::parse_summary_body(&body, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_search_body_reads_id_list() {
        let body = r#"{"header": {}, "esearchresult": {"count": "2", "idlist": ["101", "102"]}}"#;
        assert_eq!(
            PubMedClient::parse_search_body(body).unwrap(),
            ids(&["101", "102"])
        );
    }

    #[test]
    fn test_parse_search_body_missing_path_is_empty() {
        assert!(PubMedClient::parse_search_body("{}").unwrap().is_empty());
        assert!(
            PubMedClient::parse_search_body(r#"{"esearchresult": {}}"#)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_parse_search_body_rejects_garbage() {
        let err = PubMedClient::parse_search_body("not json").unwrap_err();
        assert!(matches!(err, TransportError::Parse(_)));
    }

    #[test]
    fn test_parse_summary_body_keeps_request_order() {
        let body = r#"{
            "result": {
                "uids": ["102", "101"],
                "101": {"uid": "101", "title": "First", "pubdate": "2024"},
                "102": {"uid": "102", "title": "Second", "pubdate": "2023"}
            }
        }"#;
        let papers = PubMedClient::parse_summary_body(body, &ids(&["101", "102"])).unwrap();

        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].id, "101");
        assert_eq!(papers[0].title.as_deref(), Some("First"));
        assert_eq!(papers[1].id, "102");
    }

    #[test]
    fn test_parse_summary_body_skips_malformed_entries() {
        let body = r#"{
            "result": {
                "101": {"uid": "101", "title": "Good"},
                "102": "id not found"
            }
        }"#;
        let papers = PubMedClient::parse_summary_body(body, &ids(&["101", "102", "103"])).unwrap();

        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].id, "101");
    }

    #[test]
    fn test_parse_summary_body_without_result_is_empty() {
        let papers = PubMedClient::parse_summary_body("{}", &ids(&["101"])).unwrap();
        assert!(papers.is_empty());
    }

    #[test]
    fn test_parse_summary_body_reads_authors_and_email() {
        let body = r#"{
            "result": {
                "101": {
                    "uid": "101",
                    "title": "Paper",
                    "pubdate": "2024 Mar 5",
                    "authors": [
                        {"name": "A", "authtype": "Author", "affiliation": "Harvard University"},
                        {"name": "B", "affiliation": "Acme Biotech Inc."}
                    ],
                    "corresponding_author": "b@acme.test"
                }
            }
        }"#;
        let papers = PubMedClient::parse_summary_body(body, &ids(&["101"])).unwrap();

        assert_eq!(papers.len(), 1);
        let paper = &papers[0];
        assert_eq!(paper.authors.len(), 2);
        assert_eq!(paper.authors[1].name.as_deref(), Some("B"));
        assert_eq!(
            paper.authors[1].affiliation.as_deref(),
            Some("Acme Biotech Inc.")
        );
        assert_eq!(
            paper.corresponding_author_email.as_deref(),
            Some("b@acme.test")
        );
    }
}
