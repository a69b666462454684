//! Repository trait for slug mapping data access.

use crate::domain::entities::{Entry, NewEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the persistent slug key space.
///
/// All mutating operations return a definitive outcome; none silently drops
/// a write. Serialization against concurrent callers is internal to the
/// implementation: `insert` is constraint-backed, and `increment_click` is a
/// single atomic read-modify-write evaluated by the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteEntryRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_entry.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Returns true iff a live entry with that slug is present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, slug: &str) -> Result<bool, AppError>;

    /// Finds an entry by its slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Entry))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, slug: &str) -> Result<Option<Entry>, AppError>;

    /// Creates a new entry with `click_count = 0` and the insertion timestamp.
    ///
    /// Check-then-insert is atomic with respect to concurrent callers: of two
    /// concurrent inserts of the same slug exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_entry: NewEntry) -> Result<Entry, AppError>;

    /// Atomically adds 1 to the entry's click counter.
    ///
    /// The increment is a single arithmetic update evaluated by the store,
    /// returning the refreshed row, so it cannot race a concurrent delete
    /// into counting a click for a slug that no longer exists.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Entry))` with the updated counter if the slug exists
    /// - `Ok(None)` if not found (no mutation occurred)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_click(&self, slug: &str) -> Result<Option<Entry>, AppError>;

    /// Renames and/or repoints an entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `new_slug` already exists and
    /// differs from `old_slug`.
    /// Returns [`AppError::NotFound`] if no entry matches `old_slug`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, old_slug: &str, new_slug: &str, url: &str) -> Result<Entry, AppError>;

    /// Deletes an entry by slug.
    ///
    /// Idempotent: returns `Ok(true)` if an entry was removed, `Ok(false)`
    /// if no entry matched. Deleting an absent slug is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, slug: &str) -> Result<bool, AppError>;

    /// Lists entries most-recent-first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Entry>, AppError>;

    /// Lists entries by click count descending; ties rank earlier-created
    /// entries higher.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_top(&self, limit: i64) -> Result<Vec<Entry>, AppError>;

    /// Lists entries whose slug or url contains `substring` (case-sensitive),
    /// ordered by click count descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, substring: &str) -> Result<Vec<Entry>, AppError>;
}
