//! Creator Finder server entry point

use anyhow::Result;
use creator_finder::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings_path = config::locate();
    let settings = config::load_from(settings_path.as_deref())?;

    // RUST_LOG wins over the debug flag
    let default_level = if settings.general.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    info!("Starting Creator Finder v{}", creator_finder::VERSION);
    match settings_path {
        Some(ref path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }
    info!("Loaded configuration for instance: {}", settings.general.instance_name);

    if settings.api_key().is_none() {
        warn!("No YouTube API key configured; searches will fail until YOUTUBE_API_KEY is set");
    }

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!(
        "HTTP client initialized (timeout {:?}, enrichment concurrency {})",
        client.timeout(),
        settings.search.enrich_concurrency
    );

    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    let state = AppState::new(settings, client)?;
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
