use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use dashmap::DashMap;
use hybrid_search_client::client::http::SearchClient;
use hybrid_search_client::search::normalizer::format_score;
use hybrid_search_client::search::types::SearchResult;
use hybrid_search_client::session::session::SearchSession;
use hybrid_search_client::session::types::{SearchPhase, SubmitOutcome};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Sessions untouched for this long are dropped when a new one is created.
const SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Clone)]
pub struct AppState {
    client: SearchClient,
    sessions: Arc<DashMap<String, SessionEntry>>,
}

struct SessionEntry {
    session: Arc<SearchSession>,
    last_used: Instant,
}

impl AppState {
    pub fn new(client: SearchClient) -> Self {
        Self {
            client,
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Returns the session for `id`, creating one (with a fresh id) when the
    /// id is missing or unknown.
    fn session(&self, id: Option<&str>) -> (String, Arc<SearchSession>) {
        if let Some(id) = id {
            if let Some(mut entry) = self.sessions.get_mut(id) {
                entry.last_used = Instant::now();
                return (id.to_string(), entry.session.clone());
            }
        }

        self.prune_idle();

        let id = uuid::Uuid::new_v4().to_string();
        let session = Arc::new(SearchSession::new(self.client.clone()));
        self.sessions.insert(
            id.clone(),
            SessionEntry {
                session: session.clone(),
                last_used: Instant::now(),
            },
        );
        tracing::debug!("Created UI session {}", id);

        (id, session)
    }

    fn prune_idle(&self) {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| entry.last_used.elapsed() < SESSION_IDLE_TIMEOUT);

        let pruned = before.saturating_sub(self.sessions.len());
        if pruned > 0 {
            tracing::info!(
                "Pruned {} idle UI sessions ({} active)",
                pruned,
                self.session_count()
            );
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui))
        .route("/api/search", post(api_search))
        .route("/api/health", get(api_health))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ApiSearchRequest {
    pub query: String,
    pub session_id: Option<String>,
}

/// One result card, with scores already formatted for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultView {
    pub rank: usize,
    pub id: String,
    pub hybrid: Option<f64>,
    pub semantic: Option<f64>,
    pub bm25: Option<f64>,
    pub hybrid_display: String,
    pub semantic_display: String,
    pub bm25_display: String,
    pub profile_name: String,
    pub summary: String,
    pub text: String,
}

impl ResultView {
    fn new(rank: usize, result: &SearchResult) -> Self {
        Self {
            rank,
            id: result.id.clone(),
            hybrid: result.hybrid,
            semantic: result.semantic,
            bm25: result.bm25,
            hybrid_display: format_score(result.hybrid),
            semantic_display: format_score(result.semantic),
            bm25_display: format_score(result.bm25),
            profile_name: result.profile_name.clone(),
            summary: result.summary.clone(),
            text: result.text.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiSearchResponse {
    pub session_id: String,
    pub ticket: Option<u64>,
    /// Set when a newer search in the same session superseded this one.
    pub stale: bool,
    pub phase: SearchPhase,
    pub query: Option<String>,
    pub error: Option<String>,
    pub results: Vec<ResultView>,
}

impl ApiSearchResponse {
    fn new(session_id: String, outcome: SubmitOutcome) -> Self {
        let state = outcome.state;
        Self {
            session_id,
            ticket: outcome.ticket,
            stale: !outcome.applied,
            phase: state.phase,
            query: state.query,
            error: state.error,
            results: state
                .results
                .iter()
                .enumerate()
                .map(|(index, result)| ResultView::new(index + 1, result))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiHealthResponse {
    pub backend: String,
    pub status: String,
    pub error: Option<String>,
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn api_search(
    State(state): State<AppState>,
    Json(req): Json<ApiSearchRequest>,
) -> (StatusCode, Json<ApiSearchResponse>) {
    let (session_id, session) = state.session(req.session_id.as_deref());
    let outcome = session.submit(&req.query).await;

    let status = match (outcome.ticket, outcome.state.phase) {
        (None, _) => StatusCode::BAD_REQUEST,
        (Some(_), _) if !outcome.applied => StatusCode::OK,
        (Some(_), SearchPhase::Failed) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };

    (status, Json(ApiSearchResponse::new(session_id, outcome)))
}

async fn api_health(State(state): State<AppState>) -> (StatusCode, Json<ApiHealthResponse>) {
    let backend = state.client.config().base_url.clone();

    match state.client.health().await {
        Ok(health) => (
            StatusCode::OK,
            Json(ApiHealthResponse {
                backend,
                status: health.status,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!("Backend health check failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ApiHealthResponse {
                    backend,
                    status: "unreachable".to_string(),
                    error: Some(e.user_message()),
                }),
            )
        }
    }
}
