//! Title filtering for show listings.
//!
//! Filtering is a pure operation over an already fetched catalog: the
//! whole record sequence stays in memory and every query narrows it
//! again from scratch. There are two entry points because the home
//! listing and the search screen treat an empty query differently.

use crate::catalog::ShowRecord;

/// Narrows the home listing by a query.
///
/// An empty query leaves the catalog untouched; anything else keeps the
/// shows whose name contains the query. The relative order of the input
/// records is preserved.
pub fn filter_catalog(records: &[ShowRecord], query: &str) -> Vec<ShowRecord> {
    if query.is_empty() {
        return records.to_vec();
    }
    filter_by_name(records, query)
}

/// Narrows search results by a query.
///
/// Unlike the home listing, an empty query yields no results here: the
/// search screen shows suggestions instead of the full catalog until
/// the user has typed something.
pub fn filter_search(records: &[ShowRecord], query: &str) -> Vec<ShowRecord> {
    if query.is_empty() {
        return Vec::new();
    }
    filter_by_name(records, query)
}

/// Keeps the records whose name contains the query as a case-insensitive
/// substring. The query is literal text; characters like `.` or `*`
/// only match themselves.
fn filter_by_name(records: &[ShowRecord], query: &str) -> Vec<ShowRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a minimal record; the filter only ever looks at the name.
    fn show(id: u32, name: &str) -> ShowRecord {
        ShowRecord {
            id,
            name: name.to_string(),
            summary: None,
            image: None,
            genres: Vec::new(),
            status: None,
            rating: None,
            runtime: None,
        }
    }

    fn names(records: &[ShowRecord]) -> Vec<&str> {
        records.iter().map(|record| record.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_on_home_listing_returns_everything() {
        let records = vec![show(1, "Breaking Bad"), show(2, "Girls")];

        let result = filter_catalog(&records, "");

        assert_eq!(result, records);
    }

    #[test]
    fn test_empty_query_on_search_returns_nothing() {
        let records = vec![show(1, "Breaking Bad"), show(2, "Girls")];

        let result = filter_search(&records, "");

        assert!(result.is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let records = vec![show(1, "Breaking Bad")];

        assert!(filter_search(&records, "bread").is_empty());
        assert_eq!(names(&filter_search(&records, "BREAK")), vec!["Breaking Bad"]);
        assert_eq!(names(&filter_search(&records, "king b")), vec!["Breaking Bad"]);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let records = vec![show(3, "Zeta"), show(1, "Alpha"), show(2, "Azure")];

        let result = filter_catalog(&records, "a");

        assert_eq!(names(&result), vec!["Zeta", "Alpha", "Azure"]);
    }

    #[test]
    fn test_query_is_literal_text() {
        let records = vec![show(1, "Maxbeth"), show(2, "Ma.beth")];

        let result = filter_search(&records, "a.b");

        assert_eq!(names(&result), vec!["Ma.beth"]);
    }

    #[test]
    fn test_non_matching_query_yields_empty_result() {
        let records = vec![show(1, "Girls")];

        assert!(filter_catalog(&records, "severance").is_empty());
        assert!(filter_search(&records, "severance").is_empty());
    }
}
