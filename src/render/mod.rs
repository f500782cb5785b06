//! Plain-text rendering of a search session for terminals.

use crate::search::normalizer::format_score;
use crate::search::types::SearchResult;
use crate::session::types::{SearchPhase, SearchState};

pub const RESULTS_HEADING: &str = "Hybrid ranking (Top 5)";
pub const EMPTY_STATE: &str = "Submit a search to see ranked results.";
pub const NO_RESULTS: &str = "No results found.";
pub const LOADING: &str = "Searching…";

/// Renders the whole view: status line or error, then the result cards.
pub fn render_state(state: &SearchState) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        out.push_str(&format!("error: {}\n", error));
    }

    match state.phase {
        SearchPhase::Pending => {
            out.push_str(&format!("{}\n", LOADING));
        }
        SearchPhase::Success if state.results.is_empty() => {
            out.push_str(&format!("{}\n", NO_RESULTS));
            return out;
        }
        SearchPhase::Idle if state.results.is_empty() && state.error.is_none() => {
            out.push_str(&format!("{}\n", EMPTY_STATE));
            return out;
        }
        _ => {}
    }

    if !state.results.is_empty() {
        out.push_str(&render_results(&state.results));
    }

    out
}

/// Renders ranked cards, numbered from 1 in the order given.
pub fn render_results(results: &[SearchResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", RESULTS_HEADING));

    for (index, result) in results.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_result(index + 1, result));
    }

    out
}

pub fn render_result(rank: usize, result: &SearchResult) -> String {
    let mut out = String::new();
    let indent = " ".repeat(format!("#{}", rank).len() + 2);

    out.push_str(&format!("#{}  {}\n", rank, result.summary));
    out.push_str(&format!("{}by {}\n", indent, result.profile_name));
    out.push_str(&format!(
        "{}Hybrid {} | Semantic {} | BM25 {}\n",
        indent,
        format_score(result.hybrid),
        format_score(result.semantic),
        format_score(result.bm25)
    ));
    for line in result.text.lines() {
        out.push_str(&format!("{}{}\n", indent, line));
    }

    out
}

#[cfg(test)]
mod tests;
