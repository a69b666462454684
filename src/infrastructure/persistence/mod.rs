//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx over a
//! local SQLite database.
//!
//! # Repositories
//!
//! - [`SqliteEntryRepository`] - Slug key-space storage and retrieval

pub mod sqlite_entry_repository;

pub use sqlite_entry_repository::SqliteEntryRepository;
