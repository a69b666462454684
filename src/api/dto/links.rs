//! DTOs for link creation and maintenance endpoints.

use crate::domain::entities::Entry;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for slug validation.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to create a short link.
///
/// With `slug` set this is a manual registration; without it a slug is
/// allocated deterministically from the URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Destination URL; `http://` is prepended when no scheme is present.
    #[validate(length(min = 2, message = "URL must be at least 2 characters"))]
    pub url: String,

    /// Optional caller-chosen slug.
    #[validate(length(min = 2, message = "Slug must be at least 2 characters"))]
    #[validate(regex(
        path = "*SLUG_REGEX",
        message = "Slug can contain only alphanumeric characters and _ and -"
    ))]
    pub slug: Option<String>,
}

/// Partial update for an existing link. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(length(min = 2, message = "Slug must be at least 2 characters"))]
    #[validate(regex(
        path = "*SLUG_REGEX",
        message = "Slug can contain only alphanumeric characters and _ and -"
    ))]
    pub slug: Option<String>,

    #[validate(length(min = 2, message = "URL must be at least 2 characters"))]
    pub url: Option<String>,
}

/// JSON representation of a stored entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub slug: String,
    pub url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            slug: entry.slug,
            url: entry.url,
            click_count: entry.click_count,
            created_at: entry.created_at,
        }
    }
}
