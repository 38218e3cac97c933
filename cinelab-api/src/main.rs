//! cinelab-api - Movie review backend service
//!
//! Exposes CRUD endpoints for movies and reviews, delegates sentiment
//! scoring of review text to a separately hosted classifier service, and
//! derives per-movie ratings on read. State is two JSON snapshot files
//! under the data directory.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinelab_api::sentiment::SentimentClient;
use cinelab_api::store::SnapshotStore;
use cinelab_api::AppState;
use cinelab_common::config::{ensure_data_dir, FileConfig};

const DEFAULT_PORT: u16 = 5850;
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_SENTIMENT_URL: &str = "http://127.0.0.1:8000/analyze";
const DEFAULT_SENTIMENT_TIMEOUT_SECS: u64 = 5;

/// Command-line arguments for cinelab-api
#[derive(Parser, Debug)]
#[command(name = "cinelab-api")]
#[command(about = "Movie review backend service for Cinelab")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "CINELAB_API_PORT")]
    port: Option<u16>,

    /// Directory holding movies.json and reviews.json
    #[arg(short, long, env = "CINELAB_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Sentiment classifier endpoint URL
    #[arg(long, env = "CINELAB_SENTIMENT_URL")]
    sentiment_url: Option<String>,

    /// Sentiment classifier request timeout in seconds
    #[arg(long, env = "CINELAB_SENTIMENT_TIMEOUT_SECS")]
    sentiment_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinelab_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Cinelab API (cinelab-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    // CLI/env beat the config file, which beats compiled defaults
    let args = Args::parse();
    let file_config = FileConfig::load();

    let port = args.port.or(file_config.api_port).unwrap_or(DEFAULT_PORT);
    let data_dir = args
        .data_dir
        .or(file_config.data_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    let sentiment_url = args
        .sentiment_url
        .or(file_config.sentiment_url)
        .unwrap_or_else(|| DEFAULT_SENTIMENT_URL.to_string());
    let sentiment_timeout = Duration::from_secs(
        args.sentiment_timeout_secs
            .or(file_config.sentiment_timeout_secs)
            .unwrap_or(DEFAULT_SENTIMENT_TIMEOUT_SECS),
    );

    ensure_data_dir(&data_dir).context("Failed to initialize data directory")?;
    info!("Data directory: {}", data_dir.display());
    info!("Sentiment classifier: {}", sentiment_url);

    // Load snapshot stores; next ids resume above the persisted maximums
    let movies = SnapshotStore::load(data_dir.join("movies.json"))
        .context("Failed to load movie store")?;
    let reviews = SnapshotStore::load(data_dir.join("reviews.json"))
        .context("Failed to load review store")?;
    info!(
        "Loaded {} movies, {} reviews",
        movies.list().len(),
        reviews.list().len()
    );

    let classifier = SentimentClient::new(sentiment_url, sentiment_timeout)
        .context("Failed to build sentiment client")?;

    let state = AppState::new(movies, reviews, classifier);
    let app = cinelab_api::build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("cinelab-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        }
    }
}
