//! Search Result Module
//!
//! Everything the client knows about a search hit once it has left the backend.
//!
//! ## Overview
//! The backend owns ranking: it decides the order and computes the hybrid,
//! semantic and BM25 scores. This module only reshapes its payload into a
//! stable record the renderers can rely on.
//!
//! ## Submodules
//! - **`normalizer`**: Field-synonym resolution, top-5 truncation and score formatting.
//! - **`types`**: The `SearchResult` record and the display defaults.

pub mod normalizer;
pub mod types;
