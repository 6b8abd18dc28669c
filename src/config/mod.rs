//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint settings for the PubMed E-utilities API
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

/// PubMed E-utilities endpoint settings.
///
/// The base URLs are configurable so tests can point the client at a local
/// double instead of NCBI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// URL of the esearch endpoint (query -> paper ids)
    #[serde(default = "default_esearch_url")]
    pub esearch_url: String,

    /// URL of the esummary endpoint (paper ids -> summary records)
    #[serde(default = "default_esummary_url")]
    pub esummary_url: String,

    /// Maximum number of ids a search may return
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            esearch_url: default_esearch_url(),
            esummary_url: default_esummary_url(),
            max_results: default_max_results(),
        }
    }
}

fn default_esearch_url() -> String {
    "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi".to_string()
}

fn default_esummary_url() -> String {
    "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi".to_string()
}

fn default_max_results() -> usize {
    10
}

/// Load configuration from a file, layered with `PUBMED_SCREEN_*` env vars
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("PUBMED_SCREEN"))
        .build()?;

    settings.try_deserialize()
}
