//! Entry entity representing a slug -> URL mapping.

use chrono::{DateTime, Utc};

/// A stored slug mapping with its click counter.
///
/// The slug is the primary key of the store; `click_count` only ever grows,
/// and only as a side effect of resolving that exact slug. `created_at` is
/// set once at insertion and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub slug: String,
    pub url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(slug: String, url: String, click_count: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            url,
            click_count,
            created_at,
        }
    }
}

/// Input data for creating a new entry.
///
/// The URL must already be normalized (scheme-qualified) by the caller;
/// the store assigns `click_count = 0` and the creation timestamp.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub slug: String,
    pub url: String,
}
