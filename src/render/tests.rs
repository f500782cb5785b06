#[cfg(test)]
mod tests {
    use crate::render::*;
    use crate::search::normalizer::normalize_results;
    use crate::session::types::{SearchPhase, SearchState};
    use serde_json::json;

    fn state(phase: SearchPhase) -> SearchState {
        SearchState {
            phase,
            ..SearchState::default()
        }
    }

    #[test]
    fn test_render_empty_state() {
        assert_eq!(render_state(&SearchState::default()).trim(), EMPTY_STATE);
    }

    #[test]
    fn test_render_pending() {
        assert!(render_state(&state(SearchPhase::Pending)).contains(LOADING));
    }

    #[test]
    fn test_render_success_without_results() {
        assert_eq!(render_state(&state(SearchPhase::Success)).trim(), NO_RESULTS);
    }

    #[test]
    fn test_render_error_hides_empty_state() {
        let failed = SearchState {
            error: Some("Search request failed with status 500".to_string()),
            ..state(SearchPhase::Failed)
        };

        let out = render_state(&failed);

        assert!(out.starts_with("error: Search request failed with status 500"));
        assert!(!out.contains(EMPTY_STATE));
        assert!(!out.contains(RESULTS_HEADING));
    }

    #[test]
    fn test_render_cards() {
        let results = normalize_results(&json!([
            {
                "id": "a",
                "hybrid": 0.91234,
                "semantic": 0.5,
                "title": "Great blender",
                "profile_name": "Jane",
                "text": "Crushes ice.\nA bit loud."
            },
            { "id": "b" },
        ]));
        let out = render_state(&SearchState {
            results,
            ..state(SearchPhase::Success)
        });

        assert!(out.starts_with(RESULTS_HEADING));
        assert!(out.contains("#1  Great blender\n    by Jane\n"));
        assert!(out.contains("    Hybrid 0.9123 | Semantic 0.5000 | BM25 –\n"));
        assert!(out.contains("    Crushes ice.\n    A bit loud.\n"));
        assert!(out.contains("#2  Untitled review\n    by Unknown reviewer\n"));
        assert!(out.contains("    No content available."));
    }

    #[test]
    fn test_render_keeps_results_while_loading() {
        let results = normalize_results(&json!([{ "id": "a" }]));
        let out = render_state(&SearchState {
            results,
            ..state(SearchPhase::Pending)
        });

        assert!(out.contains(LOADING));
        assert!(out.contains("#1"));
    }
}
