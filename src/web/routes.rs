//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Search page
        .route("/", get(handlers::index))
        .route("/export", post(handlers::export_form))
        // API routes
        .route("/api/search", get(handlers::api_search))
        .route("/api/export", post(handlers::api_export))
        .route("/health", get(handlers::health))
        // Static routes
        .route("/robots.txt", get(handlers::robots_txt))
        .route("/favicon.ico", get(handlers::favicon))
        // Add middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Add state
        .with_state(state)
}
