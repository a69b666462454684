#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use shurl::application::services::{BrowseService, EntryService};
use shurl::infrastructure::persistence::SqliteEntryRepository;
use shurl::state::AppState;
use shurl::utils::slug::DEFAULT_RESERVED_SLUGS;

pub const TEST_MAX_PROBE_ATTEMPTS: usize = 32;

pub fn default_reserved() -> Vec<String> {
    DEFAULT_RESERVED_SLUGS.iter().map(|s| s.to_string()).collect()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);
    let repo = Arc::new(SqliteEntryRepository::new(pool.clone()));

    AppState {
        entry_service: Arc::new(EntryService::new(
            repo.clone(),
            default_reserved(),
            TEST_MAX_PROBE_ATTEMPTS,
        )),
        browse_service: Arc::new(BrowseService::new(repo)),
        pool,
    }
}

pub async fn create_test_entry(pool: &SqlitePool, slug: &str, url: &str) {
    sqlx::query("INSERT INTO entries (slug, url, click_count, created_at) VALUES (?1, ?2, 0, ?3)")
        .bind(slug)
        .bind(url)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_entry_with_stats(
    pool: &SqlitePool,
    slug: &str,
    url: &str,
    click_count: i64,
    created_at: DateTime<Utc>,
) {
    sqlx::query("INSERT INTO entries (slug, url, click_count, created_at) VALUES (?1, ?2, ?3, ?4)")
        .bind(slug)
        .bind(url)
        .bind(click_count)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn click_count(pool: &SqlitePool, slug: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM entries WHERE slug = ?1")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn entry_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM entries")
        .fetch_one(pool)
        .await
        .unwrap()
}
