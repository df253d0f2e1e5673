//! Backend-neutral movie release types.
//!
//! The backend joins a movie row with one release date row per country,
//! so a `Movie` here is really "one release of one movie in one country".
//! cinecal-cli works exclusively with these records for display,
//! selection and ICS generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for a movie record, stable within a single fetch result.
pub type MovieId = i64;

/// Base URL for TMDB detail pages.
pub const TMDB_MOVIE_URL: &str = "https://www.themoviedb.org/movie";

/// A movie release as returned by the backend.
///
/// `release_date` is optional: the backend is expected to send one for
/// every record, but a missing or malformed date must not take down a
/// whole export, so consumers treat such records as skippable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: MovieId,
    pub tmdb_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub release_type: u8,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    /// Detail page URL on TMDB, embedded in generated event descriptions.
    pub fn tmdb_url(&self) -> String {
        format!("{}/{}", TMDB_MOVIE_URL, self.tmdb_id)
    }

    /// Display label for this record's release type.
    pub fn release_type_label(&self) -> &'static str {
        match ReleaseType::from_code(self.release_type) {
            Some(t) => t.label(),
            None => "Unknown",
        }
    }
}

/// Release type classification used by the backend filter.
///
/// The numeric codes are the backend's contract. Records can carry codes
/// outside this set; they are passed through untouched and rendered as
/// "Unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseType {
    Premiere,
    Theatrical,
    Digital,
    Physical,
    Tv,
}

impl ReleaseType {
    /// Numeric code sent to the backend's `release_type` filter.
    pub fn code(self) -> u8 {
        match self {
            ReleaseType::Premiere => 1,
            ReleaseType::Theatrical => 3,
            ReleaseType::Digital => 4,
            ReleaseType::Physical => 5,
            ReleaseType::Tv => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ReleaseType::Premiere),
            3 => Some(ReleaseType::Theatrical),
            4 => Some(ReleaseType::Digital),
            5 => Some(ReleaseType::Physical),
            6 => Some(ReleaseType::Tv),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReleaseType::Premiere => "Premiere",
            ReleaseType::Theatrical => "Theatrical",
            ReleaseType::Digital => "Digital",
            ReleaseType::Physical => "Physical",
            ReleaseType::Tv => "TV",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReleaseType {
    type Err = String;

    /// Accepts either a name ("theatrical", case-insensitive) or the raw
    /// numeric code ("3").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u8>() {
            return ReleaseType::from_code(code)
                .ok_or_else(|| format!("Unknown release type code: {}", code));
        }

        match s.to_lowercase().as_str() {
            "premiere" => Ok(ReleaseType::Premiere),
            "theatrical" => Ok(ReleaseType::Theatrical),
            "digital" => Ok(ReleaseType::Digital),
            "physical" => Ok(ReleaseType::Physical),
            "tv" => Ok(ReleaseType::Tv),
            _ => Err(format!(
                "Unknown release type '{}'. Expected one of: premiere, theatrical, digital, physical, tv",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(release_type: u8) -> Movie {
        Movie {
            movie_id: 1,
            tmdb_id: 999,
            title: "Dune: Part Three".to_string(),
            description: None,
            poster_url: None,
            country_code: "IE".to_string(),
            release_type,
            release_date: Some("2026-11-20".to_string()),
        }
    }

    // --- tmdb_url ---

    #[test]
    fn tmdb_url_uses_tmdb_id() {
        assert_eq!(
            movie(3).tmdb_url(),
            "https://www.themoviedb.org/movie/999"
        );
    }

    // --- release type labels ---

    #[test]
    fn known_codes_have_labels() {
        assert_eq!(movie(1).release_type_label(), "Premiere");
        assert_eq!(movie(3).release_type_label(), "Theatrical");
        assert_eq!(movie(4).release_type_label(), "Digital");
        assert_eq!(movie(5).release_type_label(), "Physical");
        assert_eq!(movie(6).release_type_label(), "TV");
    }

    #[test]
    fn unknown_code_renders_unknown() {
        assert_eq!(movie(2).release_type_label(), "Unknown");
        assert_eq!(movie(0).release_type_label(), "Unknown");
    }

    // --- FromStr ---

    #[test]
    fn parse_by_name() {
        assert_eq!("theatrical".parse::<ReleaseType>(), Ok(ReleaseType::Theatrical));
        assert_eq!("Digital".parse::<ReleaseType>(), Ok(ReleaseType::Digital));
        assert_eq!("TV".parse::<ReleaseType>(), Ok(ReleaseType::Tv));
    }

    #[test]
    fn parse_by_code() {
        assert_eq!("1".parse::<ReleaseType>(), Ok(ReleaseType::Premiere));
        assert_eq!("5".parse::<ReleaseType>(), Ok(ReleaseType::Physical));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("bluray".parse::<ReleaseType>().is_err());
        assert!("2".parse::<ReleaseType>().is_err());
    }

    #[test]
    fn round_trip_codes() {
        for t in [
            ReleaseType::Premiere,
            ReleaseType::Theatrical,
            ReleaseType::Digital,
            ReleaseType::Physical,
            ReleaseType::Tv,
        ] {
            assert_eq!(ReleaseType::from_code(t.code()), Some(t));
        }
    }

    // --- deserialization ---

    #[test]
    fn deserialize_backend_record() {
        let json = r#"{
            "movie_id": 42,
            "tmdb_id": 603692,
            "title": "John Wick: Chapter 5",
            "description": "He's back.",
            "poster_url": "https://image.tmdb.org/t/p/w500/x.jpg",
            "country_code": "IE",
            "release_type": 3,
            "release_date": "2026-03-27"
        }"#;
        let m: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(m.movie_id, 42);
        assert_eq!(m.release_date.as_deref(), Some("2026-03-27"));
    }

    #[test]
    fn deserialize_tolerates_missing_optional_fields() {
        let json = r#"{"movie_id": 7, "tmdb_id": 8, "title": "Untitled"}"#;
        let m: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(m.description, None);
        assert_eq!(m.release_date, None);
        assert_eq!(m.release_type, 0);
    }
}
