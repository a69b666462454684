//! Business logic services for the application layer.

pub mod browse_service;
pub mod entry_service;

pub use browse_service::BrowseService;
pub use entry_service::EntryService;
