//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, migrations, service wiring, and the Axum server
//! lifecycle.

use crate::application::services::{BrowseService, EntryService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteEntryRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if missing)
/// - Embedded migrations
/// - Entry and browse services over the shared repository
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database setup fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(connect_options)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let entry_repository = Arc::new(SqliteEntryRepository::new(pool.clone()));

    let entry_service = Arc::new(EntryService::new(
        entry_repository.clone(),
        config.reserved_slugs.clone(),
        config.max_probe_attempts,
    ));
    let browse_service = Arc::new(BrowseService::new(entry_repository));

    let state = AppState {
        entry_service,
        browse_service,
        pool,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
