use clap::Parser;
use hybrid_search_client::client::config::ClientConfig;
use hybrid_search_client::client::http::SearchClient;
use hybrid_search_client::render::render_state;
use hybrid_search_client::session::session::SearchSession;
use hybrid_search_client::session::types::{SearchPhase, SearchState};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const PROMPT: &str = "search> ";

/// Query a hybrid (BM25 + semantic) search backend and show the top 5 hits.
///
/// Without a query, starts an interactive prompt. Connection settings default
/// to the API_BASE_URL, SEARCH_ENDPOINT, SEARCH_ALPHA and SEARCH_TIMEOUT_SECS
/// environment variables.
#[derive(Parser, Debug)]
#[command(name = "hybrid-search", version)]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8000
    #[arg(long)]
    base_url: Option<String>,

    /// Search path on the backend (/search/hybrid or /search)
    #[arg(long)]
    endpoint: Option<String>,

    /// Semantic weight in [0, 1]; the backend default applies when omitted
    #[arg(long)]
    alpha: Option<f64>,

    /// Print normalized results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Check backend health and exit
    #[arg(long)]
    health: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Query words; joined with spaces
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if cli.alpha.is_some() {
        config = config.with_alpha(cli.alpha);
    }

    tracing::debug!("Using backend {}", config.search_url());
    let client = SearchClient::new(config)?;

    if cli.health {
        match client.health().await {
            Ok(health) => {
                println!("{}: {}", client.config().base_url, health.status);
                return Ok(());
            }
            Err(e) => {
                eprintln!("{}: {}", client.config().base_url, e.user_message());
                std::process::exit(1);
            }
        }
    }

    let session = SearchSession::new(client);

    if !cli.query.is_empty() {
        let outcome = session.submit(&cli.query.join(" ")).await;
        print_state(&outcome.state, cli.json)?;

        if outcome.state.phase != SearchPhase::Success {
            std::process::exit(1);
        }
        return Ok(());
    }

    run_prompt(&session, cli.json).await
}

/// Reads queries line by line until EOF or `:quit`.
async fn run_prompt(session: &SearchSession, json: bool) -> anyhow::Result<()> {
    println!(
        "Hybrid search against {} (:quit to exit)",
        session.client().config().search_url()
    );
    print_state(&session.snapshot().await, json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), ":quit" | ":q" | "exit") {
            break;
        }

        let outcome = session.submit(&line).await;
        print_state(&outcome.state, json)?;
    }

    Ok(())
}

fn print_state(state: &SearchState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(state)?);
    } else {
        print!("{}", render_state(state));
    }
    Ok(())
}
