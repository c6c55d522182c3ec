/// TVMaze catalog provider implementation.
use super::tvmaze_types::{TvMazeSearchResult, TvMazeShow};
use super::{CatalogProvider, FetchError, ImageSet, ShowRecord};

/// The fixed query parameter used to request the full catalog.
const CATALOG_QUERY: &str = "all";

/// Catalog provider for the TVMaze API.
///
/// This provider fetches the show catalog from https://api.tvmaze.com
/// using the search endpoint with a fixed catch-all query.
pub struct TvMazeCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeCatalog {
    /// Creates a new TVMaze catalog provider instance.
    pub fn new() -> Self {
        Self::with_base_url("https://api.tvmaze.com")
    }

    /// Creates a provider that talks to a different host.
    ///
    /// Mainly useful for pointing the client at a local mock server in
    /// tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Converts a TVMaze show payload to our internal ShowRecord structure.
    fn convert_show(tvmaze_show: TvMazeShow) -> ShowRecord {
        ShowRecord {
            id: tvmaze_show.id,
            name: tvmaze_show.name,
            summary: tvmaze_show.summary,
            image: tvmaze_show.image.map(|image| ImageSet {
                medium: image.medium,
                original: image.original,
            }),
            genres: tvmaze_show.genres,
            status: tvmaze_show.status,
            rating: tvmaze_show.rating.and_then(|rating| rating.average),
            runtime: tvmaze_show.runtime,
        }
    }
}

impl CatalogProvider for TvMazeCatalog {
    fn fetch_all(&self) -> Result<Vec<ShowRecord>, FetchError> {
        // Build the API URL
        let url = format!("{}/search/shows", self.base_url);

        // Make the HTTP request with the catch-all query parameter
        let response = self
            .client
            .get(&url)
            .query(&[("q", CATALOG_QUERY)])
            .send()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        // Ensure the request was successful
        if !response.status().is_success() {
            return Err(FetchError::Status {
                code: response.status().as_u16(),
                reason: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            });
        }

        // Parse the JSON response
        let results: Vec<TvMazeSearchResult> = response
            .json()
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        // Unwrap the envelopes, keeping the source order
        Ok(results
            .into_iter()
            .map(|envelope| Self::convert_show(envelope.show))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_show_maps_all_fields() {
        let payload = r#"{
            "id": 139,
            "name": "Girls",
            "summary": "<p>This Emmy winning series is a comic look at the assorted humiliations of a group of girls in their 20s.</p>",
            "genres": ["Drama", "Romance"],
            "status": "Ended",
            "runtime": 30,
            "rating": {"average": 6.6},
            "image": {
                "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/31/78286.jpg",
                "original": "https://static.tvmaze.com/uploads/images/original_untouched/31/78286.jpg"
            }
        }"#;
        let show: TvMazeShow = serde_json::from_str(payload).unwrap();

        let record = TvMazeCatalog::convert_show(show);

        assert_eq!(record.id, 139);
        assert_eq!(record.name, "Girls");
        assert!(record.summary.unwrap().starts_with("<p>"));
        assert_eq!(record.genres, vec!["Drama", "Romance"]);
        assert_eq!(record.status.as_deref(), Some("Ended"));
        assert_eq!(record.rating, Some(6.6));
        assert_eq!(record.runtime, Some(30));
        let image = record.image.unwrap();
        assert!(image.medium.unwrap().contains("medium_portrait"));
        assert!(image.original.unwrap().contains("original_untouched"));
    }

    #[test]
    fn test_convert_show_handles_absent_optionals() {
        let payload = r#"{
            "id": 66,
            "name": "The Amazing Race",
            "summary": null,
            "genres": [],
            "status": null,
            "runtime": null,
            "rating": {"average": null},
            "image": null
        }"#;
        let show: TvMazeShow = serde_json::from_str(payload).unwrap();

        let record = TvMazeCatalog::convert_show(show);

        assert_eq!(record.id, 66);
        assert_eq!(record.summary, None);
        assert_eq!(record.image, None);
        assert!(record.genres.is_empty());
        assert_eq!(record.status, None);
        assert_eq!(record.rating, None);
        assert_eq!(record.runtime, None);
    }

    #[test]
    fn test_envelope_array_parses_and_keeps_order() {
        let payload = r#"[
            {"score": 0.9, "show": {"id": 3, "name": "Zeta"}},
            {"score": 0.8, "show": {"id": 1, "name": "Alpha"}},
            {"score": 0.7, "show": {"id": 2, "name": "Azure"}}
        ]"#;
        let results: Vec<TvMazeSearchResult> = serde_json::from_str(payload).unwrap();

        let names: Vec<String> = results
            .into_iter()
            .map(|envelope| TvMazeCatalog::convert_show(envelope.show).name)
            .collect();

        assert_eq!(names, vec!["Zeta", "Alpha", "Azure"]);
    }
}
