//! Repository trait definitions for the domain layer.
//!
//! The single [`EntryRepository`] trait is the key-store contract: slug
//! uniqueness, atomic click counting, and the listing queries all live
//! behind it. The concrete implementation lives in
//! `crate::infrastructure::persistence`; a mock implementation is
//! auto-generated via `mockall` for unit tests.

pub mod entry_repository;

pub use entry_repository::EntryRepository;

#[cfg(test)]
pub use entry_repository::MockEntryRepository;
