//! Slug allocation, registration, and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Entry, NewEntry};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;
use crate::utils::slug::{candidate_slug, is_reserved, next_base, url_checksum, validate_slug_format};
use crate::utils::url_norm::normalize_url;
use serde_json::json;

/// Service for creating, resolving, and maintaining slug mappings.
///
/// Covers both creation paths: deterministic allocation from the URL's
/// checksum and manual registration of a caller-chosen slug. The reserved
/// set and probe ceiling come in as configuration; the repository is an
/// injected handle.
pub struct EntryService<R: EntryRepository> {
    repository: Arc<R>,
    reserved_slugs: Vec<String>,
    max_probe_attempts: usize,
}

impl<R: EntryRepository> EntryService<R> {
    /// Creates a new entry service.
    pub fn new(repository: Arc<R>, reserved_slugs: Vec<String>, max_probe_attempts: usize) -> Self {
        Self {
            repository,
            reserved_slugs,
            max_probe_attempts,
        }
    }

    /// Allocates a slug for a URL and stores the mapping.
    ///
    /// # Algorithm
    ///
    /// The normalized URL's 32-bit checksum seeds the candidate sequence:
    /// bucket `(checksum + base) mod M`, base-62 encoded, with `base`
    /// starting at 1 and advancing by squaring on every collision. Identical
    /// URLs against identical store states therefore allocate identical
    /// slugs. A candidate that is taken or reserved is a collision; so is a
    /// lost insert race - the insert outcome is the sole authority on
    /// success, and a `Conflict` from it re-enters the probe loop.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid.
    /// Returns [`AppError::Internal`] if the probe ceiling is exhausted or
    /// on database errors.
    pub async fn allocate(&self, url: String) -> Result<Entry, AppError> {
        let url = self.normalize(&url)?;
        let checksum = url_checksum(&url);
        let mut base: u64 = 1;

        for _ in 0..self.max_probe_attempts {
            let candidate = candidate_slug(checksum, base);

            if is_reserved(&candidate, &self.reserved_slugs)
                || self.repository.exists(&candidate).await?
            {
                base = next_base(base);
                continue;
            }

            let new_entry = NewEntry {
                slug: candidate,
                url: url.clone(),
            };
            match self.repository.insert(new_entry).await {
                Ok(entry) => {
                    tracing::debug!(slug = %entry.slug, "allocated slug");
                    return Ok(entry);
                }
                // Claimed between the exists probe and the insert; keep probing.
                Err(AppError::Conflict { .. }) => base = next_base(base),
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Slug allocation exhausted",
            json!({ "attempts": self.max_probe_attempts }),
        ))
    }

    /// Registers a caller-chosen slug for a URL.
    ///
    /// # Validation order
    ///
    /// 1. Slug length and charset
    /// 2. Slug not already taken
    /// 3. Slug not reserved
    /// 4. URL length, then scheme normalization
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for any rejected input, including a
    /// taken slug - also when the conflict is first detected by the insert
    /// itself after a clean pre-check.
    pub async fn register(&self, slug: String, url: String) -> Result<Entry, AppError> {
        validate_slug_format(&slug)?;

        if self.repository.exists(&slug).await? {
            return Err(AppError::bad_request(
                "A slug with this name already exists",
                json!({ "slug": slug }),
            ));
        }

        if is_reserved(&slug, &self.reserved_slugs) {
            return Err(AppError::bad_request(
                "This slug is reserved",
                json!({ "slug": slug }),
            ));
        }

        let url = self.normalize(&url)?;

        let new_entry = NewEntry {
            slug: slug.clone(),
            url,
        };
        match self.repository.insert(new_entry).await {
            Ok(entry) => Ok(entry),
            Err(AppError::Conflict { .. }) => Err(AppError::bad_request(
                "A slug with this name already exists",
                json!({ "slug": slug }),
            )),
            Err(e) => Err(e),
        }
    }

    /// Resolves a slug to its entry, counting the click.
    ///
    /// The increment and the read are one atomic store operation; a resolved
    /// entry's `click_count` already includes this resolution, and a miss
    /// mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug does not exist.
    pub async fn resolve(&self, slug: &str) -> Result<Entry, AppError> {
        self.repository
            .increment_click(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "slug": slug })))
    }

    /// Applies a partial edit to an entry.
    ///
    /// Absent fields keep their current values. A changed slug re-runs
    /// format and reserved-name validation; a changed URL is re-normalized.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `old_slug` does not exist.
    /// Returns [`AppError::Conflict`] if the new slug is taken by another entry.
    /// Returns [`AppError::Validation`] for invalid inputs.
    pub async fn update(
        &self,
        old_slug: &str,
        new_slug: Option<String>,
        new_url: Option<String>,
    ) -> Result<Entry, AppError> {
        let current = self.repository.get(old_slug).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "slug": old_slug }))
        })?;

        let new_slug = new_slug.unwrap_or_else(|| current.slug.clone());
        if new_slug != old_slug {
            validate_slug_format(&new_slug)?;

            if is_reserved(&new_slug, &self.reserved_slugs) {
                return Err(AppError::bad_request(
                    "This slug is reserved",
                    json!({ "slug": new_slug }),
                ));
            }
        }

        let url = match new_url {
            Some(url) => self.normalize(&url)?,
            None => current.url,
        };

        self.repository.update(old_slug, &new_slug, &url).await
    }

    /// Deletes an entry. Idempotent: an absent slug is not an error.
    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        self.repository.delete(slug).await?;
        Ok(())
    }

    fn normalize(&self, url: &str) -> Result<String, AppError> {
        normalize_url(url)
            .map_err(|e| AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() })))
    }
}
