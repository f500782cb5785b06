use super::config::ClientConfig;
use super::error::{SearchError, extract_detail};
use super::protocol::{HealthResponse, SearchRequest};
use crate::search::normalizer::normalize_results;
use crate::search::types::SearchResult;
use serde_json::Value;

/// HTTP client for the hybrid search backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SearchClient {
    pub fn new(config: ClientConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self, SearchError> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validates `query`, runs the search and normalizes the response.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let query = validate_query(query)?;
        let raw = self.search_raw(query).await?;
        Ok(normalize_results(&raw))
    }

    /// Sends one search request and returns the parsed, un-normalized body.
    ///
    /// `query` is sent as given; callers validate first.
    pub async fn search_raw(&self, query: &str) -> Result<Value, SearchError> {
        let url = self.config.search_url();
        let request = SearchRequest::new(query, self.config.alpha);

        tracing::debug!("POST {} (k={}, alpha={:?})", url, request.k, request.alpha);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if !status.is_success() {
            let detail = extract_detail(&String::from_utf8_lossy(&body));
            tracing::warn!("Search backend answered {} ({:?})", status, detail);
            return Err(SearchError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_slice::<Value>(&body).map_err(|e| {
            tracing::warn!("Search backend returned invalid JSON: {}", e);
            SearchError::MalformedResponse(e.to_string())
        })
    }

    /// Queries the backend's health endpoint.
    pub async fn health(&self) -> Result<HealthResponse, SearchError> {
        let url = self.config.health_url();
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Could not read health error body: {}", e);
                    String::new()
                }
            };
            return Err(SearchError::Status {
                status: status.as_u16(),
                detail: extract_detail(&body),
            });
        }

        response
            .json::<HealthResponse>()
            .await
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))
    }
}

/// Trims the query and rejects it when nothing is left.
pub fn validate_query(input: &str) -> Result<&str, SearchError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(SearchError::EmptyQuery)
    } else {
        Ok(trimmed)
    }
}
