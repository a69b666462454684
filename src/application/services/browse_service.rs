//! Listing and search service.

use std::sync::Arc;

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;
use serde_json::json;

/// Default number of entries returned by listings.
const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on caller-requested listing sizes.
const MAX_LIMIT: i64 = 100;

/// Service for browsing the slug key space.
pub struct BrowseService<R: EntryRepository> {
    repository: Arc<R>,
}

impl<R: EntryRepository> BrowseService<R> {
    /// Creates a new browse service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists entries most-recent-first.
    pub async fn recent(&self, limit: Option<i64>) -> Result<Vec<Entry>, AppError> {
        self.repository.list_recent(clamp_limit(limit)).await
    }

    /// Lists entries by click count descending; ties rank earlier-created
    /// entries higher.
    pub async fn top(&self, limit: Option<i64>) -> Result<Vec<Entry>, AppError> {
        self.repository.list_top(clamp_limit(limit)).await
    }

    /// Lists entries whose slug or URL contains `query` (case-sensitive),
    /// most-clicked first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty query.
    pub async fn search(&self, query: &str) -> Result<Vec<Entry>, AppError> {
        if query.is_empty() {
            return Err(AppError::bad_request(
                "Search query must not be empty",
                json!({}),
            ));
        }

        self.repository.search(query).await
    }
}

fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}
