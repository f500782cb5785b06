use super::protocol::ErrorBody;

pub const VALIDATION_MESSAGE: &str = "Enter a query to search.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to complete search.";

/// Longest backend error body echoed back to the user.
const MAX_DETAIL_LEN: usize = 200;

/// Everything that can end a submission without results.
///
/// None of these are retried; the user resubmits.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Blank query. Raised before any request is sent.
    #[error("Enter a query to search.")]
    EmptyQuery,
    #[error("Search request failed with status {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("{0}")]
    Transport(String),
    #[error("Malformed search response: {0}")]
    MalformedResponse(String),
}

impl SearchError {
    /// Message shown to the user, falling back to a generic one when the
    /// underlying error has nothing to say.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SearchError::EmptyQuery)
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {}", detail))
        .unwrap_or_default()
}

/// Pulls a human-readable reason out of a non-2xx response body.
///
/// Prefers the backend's `detail`/`error` field, then the raw text. Empty
/// bodies produce `None`.
pub fn extract_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let detail = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(serde_json::Value::String(detail)),
            ..
        }) => detail,
        Ok(ErrorBody {
            detail: Some(detail),
            ..
        }) => detail.to_string(),
        Ok(ErrorBody {
            error: Some(error), ..
        }) => error,
        _ => body.to_string(),
    };

    let detail = detail.trim();
    if detail.is_empty() {
        return None;
    }

    Some(match detail.char_indices().nth(MAX_DETAIL_LEN) {
        Some((cut, _)) => format!("{}…", &detail[..cut]),
        None => detail.to_string(),
    })
}
