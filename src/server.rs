//! # HTTP API
//!
//! Exposes the aggregation pipeline as `GET /api/scraper`: a fresh scrape
//! on every request (no cache, no store), returning the sorted JSON array.
//! Any failure escaping the pipeline maps to a generic 500 with
//! `{"error": "Error scraping data"}` - no partial results are ever
//! served.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::pipeline;
use crate::scrape::ScrapeConfig;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Pipeline configuration, immutable for the process lifetime
    pub config: Arc<ScrapeConfig>,
}

/// Build the application router.
///
/// The browser client is served from another origin, so CORS is left
/// permissive.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/scraper", get(scrape_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve the API on the given port.
pub async fn serve(config: ScrapeConfig, port: u16) -> anyhow::Result<()> {
    let state = AppState {
        config: Arc::new(config),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("scraping server is up and running on http://{addr}");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn scrape_handler(State(state): State<AppState>) -> Response {
    info!("starting scrape");

    match pipeline::run(&state.config).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => {
            error!(error = %e, "error in scraper route");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error scraping data" })),
            )
                .into_response()
        }
    }
}
