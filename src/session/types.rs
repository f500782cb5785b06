use crate::client::error::SearchError;
use crate::search::types::SearchResult;
use serde::{Deserialize, Serialize};

/// Sequence number handed to each submission. Higher is newer.
pub type Ticket = u64;

/// Where the session is in its submit cycle.
///
/// Validation runs synchronously inside `submit`, so it never shows up as a
/// phase of its own: a rejected query leaves the session `Idle` with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    Idle,
    /// A request is in flight.
    Pending,
    Success,
    Failed,
}

/// Snapshot of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub phase: SearchPhase,
    /// Query of the submission that produced this state.
    pub query: Option<String>,
    pub results: Vec<SearchResult>,
    pub error: Option<String>,
    /// Ticket of the submission this state belongs to. Zero before the first one.
    pub ticket: Ticket,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            phase: SearchPhase::Idle,
            query: None,
            results: Vec::new(),
            error: None,
            ticket: 0,
        }
    }
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Pending
    }

    /// Records a rejected query. Results on screen stay as they were.
    pub fn reject(&mut self, error: &SearchError) {
        if self.phase != SearchPhase::Pending {
            self.phase = SearchPhase::Idle;
        }
        self.error = Some(error.user_message());
    }

    /// Moves to `Pending` for `ticket`. Returns `false` and changes nothing if
    /// a newer submission already owns the state.
    pub fn begin(&mut self, ticket: Ticket, query: &str) -> bool {
        if ticket < self.ticket {
            return false;
        }

        self.phase = SearchPhase::Pending;
        self.ticket = ticket;
        self.query = Some(query.to_string());
        self.error = None;
        true
    }

    /// Applies the outcome of submission `ticket`.
    ///
    /// Only the owner of the state may complete it. Success replaces the
    /// results wholesale, failure clears them.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<SearchResult>, SearchError>,
    ) -> bool {
        if ticket != self.ticket {
            return false;
        }

        match outcome {
            Ok(results) => {
                self.phase = SearchPhase::Success;
                self.results = results;
                self.error = None;
            }
            Err(error) => {
                self.phase = SearchPhase::Failed;
                self.results.clear();
                self.error = Some(error.user_message());
            }
        }
        true
    }
}

/// What `submit` hands back to the caller.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// `None` when the query was rejected before sending.
    pub ticket: Option<Ticket>,
    /// `false` when a newer submission took over and this outcome was dropped.
    pub applied: bool,
    /// Session state right after this submission settled.
    pub state: SearchState,
}
