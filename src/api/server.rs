//! Axum API server.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::cache::{self, SharedFibCache};
use crate::config::Config;

/// Shared state for all API handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-lifetime Fibonacci memoization cache.
    ///
    /// Mutex-guarded: handlers hold the lock for the duration of a
    /// computation, so overlapping cold-range requests serialize instead
    /// of racing on insertion.
    pub cache: SharedFibCache,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            cache: cache::shared(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the axum router with all API routes.
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route(
            "/api/fibonacci",
            post(super::routes::fibonacci::compute_fibonacci),
        )
        .route("/api/health", get(super::routes::health::get_health))
        .route("/api/metrics", get(super::routes::metrics::get_metrics))
        // Body size limit: 64 KiB. A valid request is a few dozen bytes;
        // reject oversized payloads before any JSON parsing.
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the API server.
pub async fn start_server(
    config: &Config,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = build_router(state);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Fibonacci API server listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
