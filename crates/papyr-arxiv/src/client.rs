//! HTTP client for the arXiv export API.
//!
//! One GET per fetch against `/api/query`, sorted by submission date
//! descending, response parsed from Atom. The client implements
//! [`PaperSource`], so ingestion treats it like any other source.

use async_trait::async_trait;
use papyr_core::{Error, Paper, Result};
use std::time::Duration;

use crate::feed::parse_feed;
use crate::query::{category_query, recent_query};
use crate::source::PaperSource;

/// Default export API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://export.arxiv.org/api/query";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the arXiv Atom export API.
pub struct ArxivClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArxivClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client against a custom endpoint with a request timeout.
    pub fn with_base_url(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Run one search query and parse the resulting feed.
    ///
    /// `search_query` is in arXiv syntax (see [`crate::query`]); results are
    /// sorted by submission date, newest first.
    pub async fn search(&self, search_query: &str, max_results: usize) -> Result<Vec<Paper>> {
        let max = max_results.to_string();
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("search_query", search_query),
                ("start", "0"),
                ("max_results", max.as_str()),
                ("sortBy", "submittedDate"),
                ("sortOrder", "descending"),
            ])
            .send()
            .await
            .map_err(|e| Error::http(format!("query failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(format!("arXiv returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("reading response: {e}")))?;

        parse_feed(&body)
    }

    /// Fetch papers in one category submitted within the last `days` days.
    ///
    /// Same transport and ordering as [`ArxivClient::search`], with the
    /// query time-boxed via [`recent_query`].
    pub async fn recent(&self, category: &str, days: i64, limit: usize) -> Result<Vec<Paper>> {
        let query = recent_query(category, days);
        log::debug!("fetching {limit} recent papers for {query}");
        self.search(&query, limit).await
    }
}

#[async_trait]
impl PaperSource for ArxivClient {
    async fn fetch(&self, category: &str, limit: usize) -> Result<Vec<Paper>> {
        let query = category_query(category);
        log::debug!("fetching {limit} papers for {query}");

        // Transport and decode failures are per-category source failures
        // from the pipeline's point of view.
        self.search(&query, limit)
            .await
            .map_err(|e| Error::source(format!("{category}: {e}")))
    }

    fn name(&self) -> &str {
        "arxiv"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = ArxivClient::new().unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.name(), "arxiv");
    }

    #[test]
    fn test_custom_base_url() {
        let client = ArxivClient::with_base_url("http://localhost:9999/api", 5).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999/api");
    }

    #[tokio::test]
    async fn test_recent_surfaces_transport_errors() {
        // Nothing listens on this port; the time-boxed fetch reports the
        // failure instead of returning an empty feed.
        let client = ArxivClient::with_base_url("http://127.0.0.1:1/api", 1).unwrap();
        let result = client.recent("cs.AI", 7, 5).await;
        assert!(result.is_err());
    }
}
