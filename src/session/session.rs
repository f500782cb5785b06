use super::types::*;
use crate::client::http::{SearchClient, validate_query};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Drives one search box: validation, the in-flight request and the state
/// shown to the user.
///
/// Submissions are never cancelled or deduplicated. Each one draws a ticket
/// from a monotonic counter and its completion is dropped unless that ticket
/// is still the latest issued, so a slow early request cannot overwrite the
/// answer to a later one.
pub struct SearchSession {
    client: SearchClient,
    state: RwLock<SearchState>,
    sequence: AtomicU64,
}

impl SearchSession {
    pub fn new(client: SearchClient) -> Self {
        Self {
            client,
            state: RwLock::new(SearchState::default()),
            sequence: AtomicU64::new(0),
        }
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    pub async fn snapshot(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Ticket of the most recent submission that reached the network.
    pub fn latest_ticket(&self) -> Ticket {
        self.sequence.load(Ordering::SeqCst)
    }

    /// Runs one submission to completion and returns the resulting state.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let query = match validate_query(input) {
            Ok(query) => query,
            Err(error) => {
                tracing::debug!("Rejected search input: {}", error);
                let mut state = self.state.write().await;
                state.reject(&error);
                return SubmitOutcome {
                    ticket: None,
                    applied: true,
                    state: state.clone(),
                };
            }
        };

        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let request_id = uuid::Uuid::new_v4();

        {
            let mut state = self.state.write().await;
            if !state.begin(ticket, query) {
                tracing::debug!("Search #{} superseded before sending", ticket);
            }
        }

        tracing::info!(%request_id, ticket, "Searching for {:?}", query);
        let outcome = self.client.search(query).await;

        match &outcome {
            Ok(results) => tracing::info!(%request_id, ticket, "Search returned {} results", results.len()),
            Err(error) => tracing::warn!(%request_id, ticket, "Search failed: {}", error),
        }

        let mut state = self.state.write().await;
        let applied = ticket == self.latest_ticket() && state.complete(ticket, outcome);
        if !applied {
            tracing::debug!(
                %request_id,
                "Dropping stale result of search #{} (latest is #{})",
                ticket,
                self.latest_ticket()
            );
        }

        SubmitOutcome {
            ticket: Some(ticket),
            applied,
            state: state.clone(),
        }
    }
}
