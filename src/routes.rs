//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /links`   - Create a short link
//! - `GET  /stats`   - Paginated per-link earnings analytics
//! - `GET  /health`  - Health check (store ping)
//! - `GET  /{code}`  - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{create_link_handler, health_handler, redirect_handler, stats_handler};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

/// Constructs the application router with all routes and middleware.
///
/// The literal routes are registered before the `/{code}` capture, so
/// `/stats` and `/health` are never treated as short codes.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/links", post(create_link_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
