//! SQLite implementation of the entry repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Entry, NewEntry};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

/// SQLite repository for the slug key space.
///
/// Slug uniqueness is backed by the primary key: `insert` and `update`
/// surface constraint violations as [`AppError::Conflict`] instead of
/// pre-checking, so concurrent writers resolve to exactly one success.
/// `increment_click` is a single `UPDATE ... RETURNING` statement; the
/// arithmetic is evaluated by the store, never read back and re-written by
/// the caller.
pub struct SqliteEntryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteEntryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn map_entry(row: &SqliteRow) -> Result<Entry, sqlx::Error> {
    Ok(Entry {
        slug: row.try_get("slug")?,
        url: row.try_get("url")?,
        click_count: row.try_get("click_count")?,
        created_at: row.try_get("created_at")?,
    })
}

fn map_entries(rows: &[SqliteRow]) -> Result<Vec<Entry>, sqlx::Error> {
    rows.iter().map(map_entry).collect()
}

#[async_trait]
impl EntryRepository for SqliteEntryRepository {
    async fn exists(&self, slug: &str) -> Result<bool, AppError> {
        let present: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM entries WHERE slug = ?1)")
                .bind(slug)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(present)
    }

    async fn get(&self, slug: &str) -> Result<Option<Entry>, AppError> {
        let row = sqlx::query(
            "SELECT slug, url, click_count, created_at FROM entries WHERE slug = ?1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(map_entry).transpose().map_err(Into::into)
    }

    async fn insert(&self, new_entry: NewEntry) -> Result<Entry, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO entries (slug, url, click_count, created_at)
            VALUES (?1, ?2, 0, ?3)
            RETURNING slug, url, click_count, created_at
            "#,
        )
        .bind(&new_entry.slug)
        .bind(&new_entry.url)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict { .. } => {
                AppError::conflict("Slug already exists", json!({ "slug": new_entry.slug }))
            }
            other => other,
        })?;

        map_entry(&row).map_err(Into::into)
    }

    async fn increment_click(&self, slug: &str) -> Result<Option<Entry>, AppError> {
        let row = sqlx::query(
            r#"
            UPDATE entries SET click_count = click_count + 1
            WHERE slug = ?1
            RETURNING slug, url, click_count, created_at
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(map_entry).transpose().map_err(Into::into)
    }

    async fn update(&self, old_slug: &str, new_slug: &str, url: &str) -> Result<Entry, AppError> {
        let row = sqlx::query(
            r#"
            UPDATE entries SET slug = ?2, url = ?3
            WHERE slug = ?1
            RETURNING slug, url, click_count, created_at
            "#,
        )
        .bind(old_slug)
        .bind(new_slug)
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict { .. } => {
                AppError::conflict("Slug already exists", json!({ "slug": new_slug }))
            }
            other => other,
        })?;

        match row {
            Some(row) => map_entry(&row).map_err(Into::into),
            None => Err(AppError::not_found(
                "Short link not found",
                json!({ "slug": old_slug }),
            )),
        }
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM entries WHERE slug = ?1")
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Entry>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT slug, url, click_count, created_at FROM entries
            ORDER BY created_at DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        map_entries(&rows).map_err(Into::into)
    }

    async fn list_top(&self, limit: i64) -> Result<Vec<Entry>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT slug, url, click_count, created_at FROM entries
            ORDER BY click_count DESC, created_at ASC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        map_entries(&rows).map_err(Into::into)
    }

    async fn search(&self, substring: &str) -> Result<Vec<Entry>, AppError> {
        // instr() is case-sensitive; LIKE would fold ASCII case.
        let rows = sqlx::query(
            r#"
            SELECT slug, url, click_count, created_at FROM entries
            WHERE instr(slug, ?1) > 0 OR instr(url, ?1) > 0
            ORDER BY click_count DESC
            "#,
        )
        .bind(substring)
        .fetch_all(self.pool.as_ref())
        .await?;

        map_entries(&rows).map_err(Into::into)
    }
}
