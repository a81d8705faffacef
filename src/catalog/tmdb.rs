use std::time::Duration;
use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::app_config::CatalogConfig;
use crate::errors::CatalogError;
use crate::normalize::{CleanedQuery, MediaKind};
use super::{Candidate, Catalog};

/// TMDB client for the movie and tv search endpoints.
///
/// The client owns the pacing delay between rows: `search` sleeps after its
/// requests complete, so the overall request rate stays polite no matter how
/// fast the caller drains results.
#[derive(Debug, Clone)]
pub struct TmdbCatalog {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API base URL
    base_url: String,
    /// Sleep applied after each row's searches
    request_delay: Duration,
}

/// One page of TMDB search results
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// A raw search result.
///
/// Movie and tv payloads carry the same information under different field
/// names (title/name, release_date/first_air_date), so one struct with
/// optional fields covers both endpoints.
#[derive(Debug, Deserialize)]
struct SearchResult {
    id: i64,
    title: Option<String>,
    name: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    #[serde(default)]
    original_language: String,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    popularity: f64,
}

impl TmdbCatalog {
    /// Create a new TMDB client from the catalog configuration
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_delay: Duration::from_millis(config.request_delay_ms),
        }
    }

    /// Run one search request against `/search/movie` or `/search/tv`
    async fn search_kind(&self, query: &CleanedQuery, kind: MediaKind) -> Result<Vec<Candidate>, CatalogError> {
        let api_url = format!("{}/search/{}", self.base_url, kind.as_str());

        let mut params: Vec<(&str, String)> = vec![
            ("api_key", self.api_key.clone()),
            ("query", query.title.clone()),
            ("page", "1".to_string()),
        ];
        if let Some(year) = query.year_hint {
            // The year filter parameter is endpoint-specific
            let param = match kind {
                MediaKind::Movie => "year",
                MediaKind::Tv => "first_air_date_year",
            };
            params.push((param, year.to_string()));
        }

        let response = self.client.get(&api_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| CatalogError::RequestFailed(format!("Failed to send request to TMDB: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("TMDB API error ({}): {}", status, error_text);
            return Err(CatalogError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let page = response.json::<SearchResponse>().await
            .map_err(|e| CatalogError::ParseError(format!("Failed to parse TMDB response: {}", e)))?;

        debug!("TMDB {} search for '{}' returned {} results", kind, query.title, page.results.len());

        Ok(page.results.into_iter().map(|result| to_candidate(result, kind)).collect())
    }
}

#[async_trait]
impl Catalog for TmdbCatalog {
    async fn search(&self, query: &CleanedQuery) -> Result<Vec<Candidate>, CatalogError> {
        let kinds: &[MediaKind] = match query.kind_hint {
            Some(MediaKind::Movie) => &[MediaKind::Movie],
            Some(MediaKind::Tv) => &[MediaKind::Tv],
            None => &[MediaKind::Movie, MediaKind::Tv],
        };

        // One failing endpoint never sinks the row, the other kind's
        // results still compete and zero results reads as not found.
        let mut candidates = Vec::new();
        for kind in kinds {
            match self.search_kind(query, *kind).await {
                Ok(mut results) => candidates.append(&mut results),
                Err(e) => warn!("TMDB {} search failed for '{}': {}", kind, query.title, e),
            }
        }

        // Stable sort: equal popularity keeps movie-before-tv arrival order
        candidates.sort_by(|a, b| b.popularity.partial_cmp(&a.popularity).unwrap_or(std::cmp::Ordering::Equal));

        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        Ok(candidates)
    }
}

/// Convert one raw search result into a candidate
fn to_candidate(result: SearchResult, kind: MediaKind) -> Candidate {
    let release_date = result.release_date.filter(|d| !d.is_empty())
        .or(result.first_air_date.filter(|d| !d.is_empty()));

    let year = release_date.as_deref()
        .and_then(|d| d.split('-').next())
        .and_then(|y| y.parse::<i32>().ok());

    Candidate {
        id: result.id,
        title: result.title.filter(|t| !t.is_empty())
            .or(result.name.filter(|n| !n.is_empty())),
        kind,
        release_date,
        language: result.original_language,
        overview: result.overview,
        popularity: result.popularity,
        year,
    }
}
