/*!
 * Normalization of raw sheet rows into catalog-ready queries.
 *
 * Row cells arrive as free text. This module turns them into typed hints:
 * a cleaned title, an optional release year pulled out of the title, an
 * optional media kind, and the destination bucket derived from the status.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sheet_processor::RawEntry;

// A parenthesized four digit year anywhere in the title, e.g. "Dune (2021)"
static YEAR_IN_PARENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\((\d{4})\)").unwrap()
});

/// Media category recognized by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    // @kind: Feature film
    Movie,
    // @kind: TV series
    Tv,
}

impl MediaKind {
    // @returns: Lowercase identifier used in API paths and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Destination list for an accepted row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusBucket {
    // @bucket: Still to watch
    Watchlist,
    // @bucket: Already watched
    Watchedlist,
}

impl StatusBucket {
    // @returns: Lowercase bucket name used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watchlist => "watchlist",
            Self::Watchedlist => "watchedlist",
        }
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully normalized row, ready for a catalog search
#[derive(Debug, Clone)]
pub struct CleanedQuery {
    /// Title with any parenthesized year removed and ends trimmed
    pub title: String,
    /// Year taken from the first parenthesized year in the title
    pub year_hint: Option<i32>,
    /// Media kind derived from the hint column, if recognizable
    pub kind_hint: Option<MediaKind>,
    /// Destination bucket derived from the status column
    pub status: StatusBucket,
}

impl CleanedQuery {
    /// Normalize one raw sheet row
    pub fn from_entry(entry: &RawEntry) -> Self {
        let (year_hint, title) = extract_year(&entry.title);
        Self {
            title,
            year_hint,
            kind_hint: normalize_kind(&entry.kind_hint),
            status: normalize_status(&entry.status_hint),
        }
    }
}

/// Pull a parenthesized year out of a title.
///
/// The year comes from the first `(NNNN)` group; every such group is removed
/// from the returned title. Only leading and trailing whitespace is trimmed,
/// interior spacing is left alone so the cleaned title stays recognizable.
pub fn extract_year(title: &str) -> (Option<i32>, String) {
    match YEAR_IN_PARENS.captures(title) {
        Some(captures) => {
            let year = captures[1].parse::<i32>().ok();
            let cleaned = YEAR_IN_PARENS.replace_all(title, "").trim().to_string();
            (year, cleaned)
        }
        None => (None, title.trim().to_string()),
    }
}

/// Interpret the movie/show hint column.
///
/// Matching is substring-based so cells like "Movie (rewatch)" or
/// "TV Show" still resolve. Unrecognized or empty cells yield `None`,
/// which widens the catalog search to both kinds.
pub fn normalize_kind(raw: &str) -> Option<MediaKind> {
    let value = raw.trim().to_lowercase();
    if value.is_empty() {
        return None;
    }

    if value.contains("movie") {
        Some(MediaKind::Movie)
    } else if value.contains("show") || value.contains("tv") || value.contains("series") {
        Some(MediaKind::Tv)
    } else {
        None
    }
}

/// Interpret the status column.
///
/// Anything that does not clearly read as already watched lands on the
/// watchlist, including blank cells. "Watched" and its variants go to the
/// watchedlist; phrasings like "to watch" or "want to watch" do not,
/// because they lead with a different word.
pub fn normalize_status(raw: &str) -> StatusBucket {
    let value = raw.trim().to_lowercase();

    if value.starts_with("watch") && value.contains("ed") {
        StatusBucket::Watchedlist
    } else {
        StatusBucket::Watchlist
    }
}
