/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use serde::Deserialize;

/// One element of the search response array: a relevance score envelope
/// wrapping the actual show payload.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The show wrapped by this envelope
    pub show: TvMazeShow,
}

/// A single show from the TVMaze API.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// TVMaze's numeric show identifier
    pub id: u32,
    /// The name of the show
    pub name: String,
    /// Show summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Poster image URLs (may be null)
    pub image: Option<TvMazeImage>,
    /// Genre labels; an empty array for shows without any
    #[serde(default)]
    pub genres: Vec<String>,
    /// Airing status such as "Running" or "Ended" (may be null)
    pub status: Option<String>,
    /// Aggregate rating block (may be null)
    pub rating: Option<TvMazeRating>,
    /// Episode runtime in minutes (may be null)
    pub runtime: Option<u32>,
}

/// Poster URLs for a show, per resolution.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    /// Medium resolution poster URL (may be null)
    pub medium: Option<String>,
    /// Original resolution poster URL (may be null)
    pub original: Option<String>,
}

/// Rating block of a show; the average itself may be null.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeRating {
    /// Average rating on TVMaze's 0-10 scale
    pub average: Option<f64>,
}
