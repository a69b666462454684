mod common;

use axum::{
    Router,
    routing::{patch, post},
};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::SqlitePool;

use shurl::api::handlers::{create_link_handler, delete_link_handler, update_link_handler};

fn test_app(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/links", post(create_link_handler))
        .route(
            "/api/links/{slug}",
            patch(update_link_handler).delete(delete_link_handler),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_create_with_slug(pool: SqlitePool) {
    let server = test_app(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "slug": "go", "url": "http://golang.org" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["slug"], "go");
    assert_eq!(body["url"], "http://golang.org");
    assert_eq!(body["click_count"], 0);
}

#[sqlx::test]
async fn test_create_without_slug_allocates(pool: SqlitePool) {
    let server = test_app(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    let slug = body["slug"].as_str().unwrap();
    assert!(!slug.is_empty());
    assert!(slug.len() <= 6);
    assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[sqlx::test]
async fn test_create_normalizes_url(pool: SqlitePool) {
    let server = test_app(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "slug": "ex", "url": "example.com/x" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["url"], "http://example.com/x");
}

#[sqlx::test]
async fn test_create_rejects_reserved_slug(pool: SqlitePool) {
    let server = test_app(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "slug": "api", "url": "http://x.com" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_rejects_bad_charset(pool: SqlitePool) {
    let server = test_app(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "slug": "bad slug!", "url": "http://x.com" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_rejects_short_slug(pool: SqlitePool) {
    let server = test_app(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "slug": "g", "url": "http://x.com" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_rejects_taken_slug(pool: SqlitePool) {
    let server = test_app(pool.clone());
    common::create_test_entry(&pool, "go", "http://golang.org").await;

    let response = server
        .post("/api/links")
        .json(&json!({ "slug": "go", "url": "http://go.dev" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_update_repoints_url(pool: SqlitePool) {
    let server = test_app(pool.clone());
    common::create_test_entry(&pool, "go", "http://golang.org").await;

    let response = server
        .patch("/api/links/go")
        .json(&json!({ "url": "go.dev" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["slug"], "go");
    assert_eq!(body["url"], "http://go.dev");
}

#[sqlx::test]
async fn test_update_renames_slug(pool: SqlitePool) {
    let server = test_app(pool.clone());
    common::create_test_entry(&pool, "go", "http://golang.org").await;

    let response = server
        .patch("/api/links/go")
        .json(&json!({ "slug": "golang" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["slug"], "golang");
    assert_eq!(body["url"], "http://golang.org");
}

#[sqlx::test]
async fn test_update_missing_is_404(pool: SqlitePool) {
    let server = test_app(pool);

    let response = server
        .patch("/api/links/missing")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_update_to_taken_slug_is_409(pool: SqlitePool) {
    let server = test_app(pool.clone());
    common::create_test_entry(&pool, "go", "http://golang.org").await;
    common::create_test_entry(&pool, "rust", "http://rust-lang.org").await;

    let response = server
        .patch("/api/links/go")
        .json(&json!({ "slug": "rust" }))
        .await;

    assert_eq!(response.status_code(), 409);
}

#[sqlx::test]
async fn test_delete_returns_204(pool: SqlitePool) {
    let server = test_app(pool.clone());
    common::create_test_entry(&pool, "go", "http://golang.org").await;

    let response = server.delete("/api/links/go").await;
    assert_eq!(response.status_code(), 204);

    assert_eq!(common::entry_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_missing_is_still_204(pool: SqlitePool) {
    let server = test_app(pool);

    let response = server.delete("/api/links/missing").await;
    assert_eq!(response.status_code(), 204);

    let again = server.delete("/api/links/missing").await;
    assert_eq!(again.status_code(), 204);
}
