use serde::{Deserialize, Serialize};

/// Number of results the client asks for and the most it will ever keep.
pub const TOP_K: usize = 5;

/// Rendered in place of a score the backend did not report.
pub const SCORE_PLACEHOLDER: &str = "–";

pub const DEFAULT_TEXT: &str = "No content available.";
pub const DEFAULT_PROFILE_NAME: &str = "Unknown reviewer";
pub const DEFAULT_SUMMARY: &str = "Untitled review";

/// One ranked hit, reconstructed from whatever shape the backend returned.
///
/// Scores stay `None` when the backend omitted them so that they render as a
/// placeholder instead of a misleading `0.0000`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub hybrid: Option<f64>,
    pub semantic: Option<f64>,
    pub bm25: Option<f64>,
    pub profile_name: String,
    pub summary: String,
    pub text: String,
}
