use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{BrowseService, EntryService};
use crate::infrastructure::persistence::SqliteEntryRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub entry_service: Arc<EntryService<SqliteEntryRepository>>,
    pub browse_service: Arc<BrowseService<SqliteEntryRepository>>,
    pub pool: Arc<SqlitePool>,
}
