//! Handlers for listing and search endpoints.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::browse::{ListQuery, SearchQuery};
use crate::api::dto::links::EntryResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists links most-recent-first.
///
/// # Endpoint
///
/// `GET /api/links?limit=10`
pub async fn recent_links_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<EntryResponse>>, AppError> {
    let entries = state.browse_service.recent(query.limit).await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Lists the most-clicked links.
///
/// # Endpoint
///
/// `GET /api/links/top?limit=10`
///
/// Ties on click count rank earlier-created links higher.
pub async fn top_links_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<EntryResponse>>, AppError> {
    let entries = state.browse_service.top(query.limit).await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Searches links by slug or URL substring (case-sensitive).
///
/// # Endpoint
///
/// `GET /api/search?q=golang`
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<EntryResponse>>, AppError> {
    let entries = state.browse_service.search(&query.q).await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
