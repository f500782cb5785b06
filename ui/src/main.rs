mod handlers;

use handlers::{AppState, router};
use hybrid_search_client::client::config::ClientConfig;
use hybrid_search_client::client::http::SearchClient;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let config = ClientConfig::from_env();
    tracing::info!("Forwarding searches to {}", config.search_url());

    let app = router(AppState::new(SearchClient::new(config)?));

    tracing::info!("UI listening on {}", bind_addr);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}
