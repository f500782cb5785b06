//! Backend Protocol Definitions
//!
//! Request and response bodies exchanged with the hybrid search backend, and
//! the endpoint paths it serves.

use crate::search::types::TOP_K;
use serde::{Deserialize, Serialize};

pub const ENDPOINT_SEARCH_HYBRID: &str = "/search/hybrid";
pub const ENDPOINT_SEARCH: &str = "/search";
pub const ENDPOINT_HEALTH: &str = "/health";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub k: usize,
    /// Semantic weight. Left out of the body when unset so the backend
    /// applies its own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, alpha: Option<f64>) -> Self {
        Self {
            query: query.into(),
            k: TOP_K,
            alpha,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body produced by the backend's framework (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<serde_json::Value>,
    pub error: Option<String>,
}
