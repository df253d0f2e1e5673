//! Backend fetch protocol types.
//!
//! Defines the JSON envelope the backend wraps every response in, and
//! the query parameters for the release listing endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{CinecalError, CinecalResult};

/// Validate and normalize a country filter before it reaches the
/// backend: exactly two ASCII letters, uppercased.
pub fn normalize_country(code: &str) -> CinecalResult<String> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(CinecalError::InvalidCountry(code.to_string()))
    }
}

/// Response envelope sent by the backend.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchResponse<T> {
    Success { data: T },
    Error { message: String },
}

impl<T> FetchResponse<T> {
    /// Unwrap the envelope into a plain Result.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            FetchResponse::Success { data } => Ok(data),
            FetchResponse::Error { message } => Err(message),
        }
    }
}

/// Query for the release listing endpoint:
/// `GET /movies/country/{country_code}?release_type=..&year=..`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieQuery {
    pub country_code: String,
    /// Comma-joined release type codes, e.g. "1,3". The backend treats
    /// this as an opaque filter key; so do we.
    pub release_types: String,
    pub year: i32,
}

impl MovieQuery {
    pub fn new(country_code: &str, release_type_codes: &[u8], year: i32) -> Self {
        let release_types = release_type_codes
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");

        MovieQuery {
            country_code: country_code.to_string(),
            release_types,
            year,
        }
    }

    /// Path portion of the request, relative to the backend base URL.
    pub fn path(&self) -> String {
        format!("movies/country/{}", self.country_code)
    }

    /// Query string pairs for the request.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.release_types.is_empty() {
            pairs.push(("release_type", self.release_types.clone()));
        }
        pairs.push(("year", self.year.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::Movie;

    // --- country validation ---

    #[test]
    fn normalize_country_uppercases() {
        assert_eq!(normalize_country("ie").unwrap(), "IE");
        assert_eq!(normalize_country(" se ").unwrap(), "SE");
    }

    #[test]
    fn normalize_country_rejects_garbage() {
        assert!(normalize_country("").is_err());
        assert!(normalize_country("IRL").is_err());
        assert!(normalize_country("1E").is_err());
    }

    // --- envelope ---

    #[test]
    fn parse_success_envelope() {
        let json = r#"{
            "status": "success",
            "data": [
                {"movie_id": 1, "tmdb_id": 10, "title": "A", "release_date": "2026-01-01"},
                {"movie_id": 2, "tmdb_id": 20, "title": "B", "release_date": "2026-02-01"}
            ]
        }"#;
        let resp: FetchResponse<Vec<Movie>> = serde_json::from_str(json).unwrap();
        let movies = resp.into_result().unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "A");
    }

    #[test]
    fn parse_error_envelope() {
        let json = r#"{"status": "error", "message": "No movies found for the specified filters"}"#;
        let resp: FetchResponse<Vec<Movie>> = serde_json::from_str(json).unwrap();
        let err = resp.into_result().unwrap_err();
        assert!(err.contains("No movies found"));
    }

    // --- query ---

    #[test]
    fn query_joins_release_types_with_commas() {
        let query = MovieQuery::new("IE", &[1, 3, 4], 2026);
        assert_eq!(query.release_types, "1,3,4");
        assert_eq!(query.path(), "movies/country/IE");
    }

    #[test]
    fn query_pairs_omit_empty_release_types() {
        let query = MovieQuery::new("IE", &[], 2026);
        let pairs = query.query_pairs();
        assert_eq!(pairs, vec![("year", "2026".to_string())]);
    }

    #[test]
    fn query_pairs_include_both_filters() {
        let query = MovieQuery::new("SE", &[3], 2025);
        let pairs = query.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("release_type", "3".to_string()),
                ("year", "2025".to_string()),
            ]
        );
    }
}
