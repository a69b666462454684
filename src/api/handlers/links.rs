//! Handlers for link management endpoints (create, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, EntryResponse, UpdateLinkRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "golang.org",
///   "slug": "go"          // optional - allocated from the URL when absent
/// }
/// ```
///
/// With `slug` the pair is registered after validation (length, charset,
/// availability, reserved names). Without it, a slug is derived from the
/// URL's checksum with collision probing. Either way the stored URL is
/// scheme-qualified.
///
/// # Errors
///
/// Returns 400 Bad Request for any rejected input, including a taken or
/// reserved slug.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), AppError> {
    payload.validate()?;

    let entry = match payload.slug {
        Some(slug) => state.entry_service.register(slug, payload.url).await?,
        None => state.entry_service.allocate(payload.url).await?,
    };

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// Updates a link's slug and/or destination URL.
///
/// # Endpoint
///
/// `PATCH /api/links/{slug}`
///
/// Absent body fields keep their current values. A replaced URL is
/// re-normalized before storage.
///
/// # Errors
///
/// Returns 404 Not Found if the slug does not exist.
/// Returns 409 Conflict if the new slug is taken by another link.
/// Returns 400 Bad Request for invalid inputs.
pub async fn update_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    payload.validate()?;

    let entry = state
        .entry_service
        .update(&slug, payload.slug, payload.url)
        .await?;

    Ok(Json(entry.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{slug}`
///
/// Idempotent: deleting an absent slug also returns 204.
pub async fn delete_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.entry_service.delete(&slug).await?;

    Ok(StatusCode::NO_CONTENT)
}
