//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, recent_links_handler, search_handler,
    top_links_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /links`         - Create a link (register a chosen slug, or allocate one)
/// - `GET    /links`         - Recent links, most-recent-first
/// - `GET    /links/top`     - Most-clicked links
/// - `PATCH  /links/{slug}`  - Update a link's slug and/or URL
/// - `DELETE /links/{slug}`  - Delete a link (idempotent)
/// - `GET    /search`        - Case-sensitive substring search over slugs and URLs
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/links",
            post(create_link_handler).get(recent_links_handler),
        )
        .route("/links/top", get(top_links_handler))
        .route(
            "/links/{slug}",
            patch(update_link_handler).delete(delete_link_handler),
        )
        .route("/search", get(search_handler))
}
