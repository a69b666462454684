//! DTOs for listing and search endpoints.

use serde::Deserialize;

/// Query parameters for the recent/top listings.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Number of entries to return; clamped server-side.
    pub limit: Option<i64>,
}

/// Query parameters for substring search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}
