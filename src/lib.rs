//! Hybrid Search Client Library
//!
//! Client side of a hybrid (BM25 + semantic) search service. The ranking engine
//! lives behind an HTTP endpoint; this crate submits queries to it, reshapes
//! its answers and renders the top five hits with their three scores.
//!
//! ## Modules
//! - **`client`**: Configuration, error taxonomy and the `reqwest` client that
//!   posts `{"query", "k": 5}` to the backend.
//! - **`search`**: The `SearchResult` record and the normalizer that maps loosely
//!   shaped JSON onto it, tolerating the field-name variants backends use.
//! - **`session`**: The submit cycle (idle, pending, success, failed) with
//!   per-submission tickets so only the latest request can update the view.
//! - **`render`**: Plain-text rendering of a session for the terminal client.

pub mod client;
pub mod render;
pub mod search;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
