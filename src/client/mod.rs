//! Search Backend Client Module
//!
//! Talks to the external hybrid search service over HTTP.
//!
//! ## Request Flow
//! 1. **Validation**: The query is trimmed; blank input never leaves the process.
//! 2. **Submission**: One `POST {base_url}/search/hybrid` with `{"query", "k": 5}`.
//! 3. **Status check**: Any non-2xx answer becomes `SearchError::Status`.
//! 4. **Decoding**: The body is parsed as JSON and handed to the normalizer.
//!
//! ## Submodules
//! - **`config`**: Base URL, endpoint, alpha and timeout, read from the environment.
//! - **`error`**: The `SearchError` taxonomy and user-facing messages.
//! - **`http`**: The `reqwest`-based `SearchClient`.
//! - **`protocol`**: Request/response DTOs and endpoint paths.

pub mod config;
pub mod error;
pub mod http;
pub mod protocol;
