//! Core domain entities representing the business data model.
//!
//! The service persists exactly one entity: the [`Entry`] mapping a slug to
//! its destination URL. Entities are plain data structures without business
//! logic; creation input uses the separate [`NewEntry`] struct.

pub mod entry;

pub use entry::{Entry, NewEntry};
