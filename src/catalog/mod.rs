/*!
 * Catalog clients.
 *
 * A catalog answers title searches with candidate records. The production
 * implementation talks to TMDB; tests substitute their own.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::CatalogError;
use crate::normalize::{CleanedQuery, MediaKind};

pub mod tmdb;

/// One catalog record competing to match a sheet row.
///
/// Field names follow the review export format, so a serialized candidate
/// can be pasted straight into the catalog's web UI search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    // @field: Catalog record id
    pub id: i64,

    // @field: Display title, absent for some obscure records
    pub title: Option<String>,

    // @field: Movie or tv
    #[serde(rename = "media_type")]
    pub kind: MediaKind,

    // @field: First release or air date as YYYY-MM-DD
    pub release_date: Option<String>,

    // @field: Original language code
    #[serde(rename = "original_language")]
    pub language: String,

    // @field: Plot summary
    pub overview: String,

    // @field: Catalog popularity metric
    pub popularity: f64,

    // @field: Release year parsed out of the release date
    pub year: Option<i32>,
}

impl Candidate {
    /// Title for log output, tolerating records without one
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("<untitled>")
    }
}

/// Common interface for metadata catalogs
#[async_trait]
pub trait Catalog: Send + Sync + Debug {
    /// Search the catalog for candidates matching one cleaned query.
    ///
    /// Results come back ordered by descending popularity. A kind hint
    /// restricts the search to that kind, otherwise both are queried.
    async fn search(&self, query: &CleanedQuery) -> Result<Vec<Candidate>, CatalogError>;
}
