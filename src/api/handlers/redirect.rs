//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its destination URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Resolution and click counting are one atomic store operation; the
/// counter is incremented exactly once per successful redirect and never
/// for a miss.
///
/// # Errors
///
/// Returns 404 Not Found if the slug does not exist. A front-end may choose
/// to reinterpret misses as search queries; this handler does not.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state.entry_service.resolve(&slug).await?;

    debug!(slug = %entry.slug, clicks = entry.click_count, "redirect");

    Ok(Redirect::temporary(&entry.url))
}
