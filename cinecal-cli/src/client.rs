//! HTTP client for the movie release backend.

use std::time::Duration;

use anyhow::{Context, Result};
use cinecal_core::Movie;
use cinecal_core::protocol::{FetchResponse, MovieQuery};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client over the backend's release listing endpoint.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        // Parse eagerly so a broken api_base_url fails before any fetch
        url::Url::parse(base_url)
            .with_context(|| format!("Invalid backend URL in config: {base_url}"))?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Client {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /movies/country/{code}?release_type=..&year=..
    ///
    /// Returns the unwrapped movie list; any HTTP or envelope failure is
    /// surfaced as an error for the caller to report (no retry).
    pub async fn fetch_releases(&self, query: &MovieQuery) -> Result<Vec<Movie>> {
        let url = format!("{}/{}", self.base_url, query.path());

        let response = self
            .http
            .get(&url)
            .query(&query.query_pairs())
            .send()
            .await
            .context("Failed to reach the movie release backend")?;

        if !response.status().is_success() {
            anyhow::bail!("Backend returned HTTP {}", response.status());
        }

        let envelope: FetchResponse<Vec<Movie>> = response
            .json()
            .await
            .context("Failed to parse backend response")?;

        envelope.into_result().map_err(|message| anyhow::anyhow!(message))
    }
}
