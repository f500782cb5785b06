use super::protocol::{ENDPOINT_HEALTH, ENDPOINT_SEARCH_HYBRID};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_BASE_URL: &str = "API_BASE_URL";
pub const ENV_ENDPOINT: &str = "SEARCH_ENDPOINT";
pub const ENV_ALPHA: &str = "SEARCH_ALPHA";
pub const ENV_TIMEOUT_SECS: &str = "SEARCH_TIMEOUT_SECS";

/// Where and how the client reaches the search backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme and authority, no trailing slash (e.g. `http://localhost:8000`).
    pub base_url: String,
    /// Search path, `/search/hybrid` unless the backend serves `/search`.
    pub endpoint: String,
    pub alpha: Option<f64>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: ENDPOINT_SEARCH_HYBRID.to_string(),
            alpha: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unset, blank or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(&base_url);
        }

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config = config.with_endpoint(&endpoint);
        }

        if let Some(alpha) = lookup(ENV_ALPHA).filter(|v| !v.trim().is_empty()) {
            match alpha.trim().parse::<f64>() {
                Ok(alpha) => config = config.with_alpha(Some(alpha)),
                Err(_) => tracing::warn!("Ignoring non-numeric {}={}", ENV_ALPHA, alpha),
            }
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!("Ignoring invalid {}={}", ENV_TIMEOUT_SECS, secs),
            }
        }

        config
    }

    /// Replaces the base URL. Blank input keeps the current one.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        if let Some(normalized) = normalize_base_url(base_url) {
            self.base_url = normalized;
        }
        self
    }

    /// Replaces the search path. A missing leading `/` is added.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        let trimmed = endpoint.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return self;
        }

        self.endpoint = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        self
    }

    /// Sets the semantic weight. Values outside `[0, 1]` are dropped.
    pub fn with_alpha(mut self, alpha: Option<f64>) -> Self {
        self.alpha = match alpha {
            Some(alpha) if (0.0..=1.0).contains(&alpha) => Some(alpha),
            Some(alpha) => {
                tracing::warn!("Ignoring alpha {} outside [0, 1]", alpha);
                None
            }
            None => None,
        };
        self
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, ENDPOINT_HEALTH)
    }
}

/// Trims whitespace and trailing slashes and adds `http://` when no scheme is
/// given. Returns `None` for blank input.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    Some(normalized.trim_end_matches('/').to_string())
}
