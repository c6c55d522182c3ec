//! ShowScout - Browse and search the TVMaze show catalog
//!
//! This library provides the core functionality for retrieving the
//! show catalog from TVMaze, narrowing it by title and tracking the
//! state of a listing screen from activation to teardown.

mod catalog;
mod filter;
mod listing;

// Re-export error types
pub use catalog::FetchError;

pub use catalog::{CatalogProvider, ImageSet, ShowRecord, TvMazeCatalog};
pub use filter::{filter_catalog, filter_search};
pub use listing::{FetchResolution, FetchTicket, ListingState, ListingViewModel, ScreenKind};
