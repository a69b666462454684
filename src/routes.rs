//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{slug}`  - Short link redirect with click tracking
//! - `GET  /health`  - Health check (database liveness)
//! - `/api/*`        - REST API (create, browse, edit, delete)
//!
//! The catch-all redirect route is why slugs colliding with the fixed path
//! segments (`api`, `health`, ...) are rejected at registration time.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
