/// Data structures and traits for show catalog retrieval.
///
/// This module provides structures to represent the catalog entries
/// returned by an external show database, as well as the trait for
/// implementing catalog providers.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeCatalog;

use thiserror::Error;

/// Errors that can occur while fetching the show catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request to the catalog provider could not be completed
    #[error("Request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success HTTP status
    #[error("Unexpected response: HTTP {code} {reason}")]
    Status {
        /// Numeric HTTP status code
        code: u16,
        /// Canonical reason phrase for the status
        reason: String,
    },

    /// Failed to parse the provider's JSON response
    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

/// Poster URLs attached to a show record.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSet {
    /// URL of the medium resolution poster
    pub medium: Option<String>,
    /// URL of the original resolution poster
    pub original: Option<String>,
}

/// A single catalog entry describing a television show.
///
/// Records are immutable once parsed from the provider's response, and
/// the `id` is unique within one fetched catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowRecord {
    /// Identifier assigned by the catalog source
    pub id: u32,
    /// Display title of the show
    pub name: String,
    /// Description as delivered by the source, HTML tags included
    pub summary: Option<String>,
    /// Poster URLs, if the source provides any
    pub image: Option<ImageSet>,
    /// Genre labels in source order
    pub genres: Vec<String>,
    /// Airing status such as "Running" or "Ended"
    pub status: Option<String>,
    /// Average rating on the source's scale
    pub rating: Option<f64>,
    /// Episode runtime in minutes
    pub runtime: Option<u32>,
}

/// Trait for providers that can fetch the full show catalog.
///
/// Implementors of this trait retrieve the complete set of catalog
/// entries from an external source such as TVMaze. Narrowing the result
/// happens on the caller's side; providers always return everything the
/// source's catalog endpoint offers.
pub trait CatalogProvider {
    /// Fetches every show the provider's catalog endpoint returns.
    ///
    /// # Returns
    ///
    /// A Result containing the fetched records in the order the source
    /// returned them, or a FetchError. Callers must not rely on any
    /// particular sorting.
    fn fetch_all(&self) -> Result<Vec<ShowRecord>, FetchError>;
}
