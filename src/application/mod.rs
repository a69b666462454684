//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers. Repository handles are injected explicitly per service; the
//! core never reaches for a hidden global connection.
//!
//! # Available Services
//!
//! - [`services::entry_service::EntryService`] - Slug allocation, registration, resolution, edit, delete
//! - [`services::browse_service::BrowseService`] - Recent/top/search listings

pub mod services;
