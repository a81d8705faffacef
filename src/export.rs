/*!
 * Output writers.
 *
 * Two files leave a run: the JSON export the web app imports, and the
 * manual review CSV holding every row the decision rules refused to
 * settle. The review file is written incrementally so an interrupted run
 * keeps the rows it already deferred.
 */

use std::fs;
use std::fs::File;
use std::path::Path;
use chrono::Local;
use log::debug;
use serde::Serialize;
use url::form_urlencoded;

use crate::catalog::Candidate;
use crate::errors::ExportError;
use crate::normalize::MediaKind;

// Column order of the review file, matched by the field order of ReviewRecord
const REVIEW_HEADERS: [&str; 9] = [
    "original_title",
    "clean_title",
    "year_hint",
    "media_type_hint",
    "status",
    "result_type",
    "candidate_count",
    "candidates_json",
    "suggested_url",
];

/// One accepted item as the web app expects it
#[derive(Debug, Clone, Serialize)]
pub struct ExportItem {
    // @field: Catalog record id
    pub id: i64,

    // @field: Movie or tv
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

impl ExportItem {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id,
            kind: candidate.kind,
        }
    }
}

/// Counters reported alongside the exported lists
#[derive(Debug, Serialize)]
pub struct ExportSummary {
    pub total_processed: usize,
    pub auto_added: usize,
    pub manual_review: usize,
    pub watchlist_count: usize,
    pub watchedlist_count: usize,
}

/// The aggregated run output consumed by the web app
#[derive(Debug, Serialize)]
pub struct WatchlistExport {
    pub generated_on: String,
    pub watchlist: Vec<ExportItem>,
    pub watchedlist: Vec<ExportItem>,
    pub summary: ExportSummary,
}

impl WatchlistExport {
    /// Assemble the export, deriving the summary counters from the lists
    pub fn new(
        watchlist: Vec<ExportItem>,
        watchedlist: Vec<ExportItem>,
        total_processed: usize,
        manual_review: usize,
    ) -> Self {
        let summary = ExportSummary {
            total_processed,
            auto_added: watchlist.len() + watchedlist.len(),
            manual_review,
            watchlist_count: watchlist.len(),
            watchedlist_count: watchedlist.len(),
        };

        Self {
            generated_on: Local::now().to_rfc3339(),
            watchlist,
            watchedlist,
            summary,
        }
    }

    /// Write the export as pretty-printed JSON
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::Serialize(e.to_string()))?;

        fs::write(path.as_ref(), json)
            .map_err(|e| ExportError::Write(format!("{}: {}", path.as_ref().display(), e)))?;

        debug!("Wrote watchlist export to {}", path.as_ref().display());

        Ok(())
    }
}

/// One deferred row as written to the review file
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRecord {
    /// Title cell exactly as it appeared in the sheet
    pub original_title: String,
    /// Title after year extraction and trimming
    pub clean_title: String,
    /// Year pulled out of the title, empty when absent
    pub year_hint: Option<i32>,
    /// Recognized kind hint, empty when absent
    pub media_type_hint: Option<String>,
    /// Destination bucket the row would have landed in
    pub status: String,
    /// "NOT FOUND" or "AMBIGUOUS: <rule>"
    pub result_type: String,
    /// Number of candidates that competed
    pub candidate_count: usize,
    /// Full candidate list as a JSON array
    pub candidates_json: String,
    /// Catalog web search primed with the cleaned title
    pub suggested_url: String,
}

/// Incremental review CSV sink.
///
/// The header goes out when the writer is created, so the file exists and
/// is well formed even when every row auto-resolves. Each appended record
/// is flushed immediately.
pub struct ReviewWriter {
    writer: csv::Writer<File>,
}

impl ReviewWriter {
    /// Create the review file and write its header
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path.as_ref())
            .map_err(|e| ExportError::Write(format!("{}: {}", path.as_ref().display(), e)))?;

        writer.write_record(REVIEW_HEADERS)
            .map_err(|e| ExportError::Write(e.to_string()))?;
        writer.flush()
            .map_err(|e| ExportError::Write(e.to_string()))?;

        Ok(Self { writer })
    }

    /// Append one deferred row and flush it to disk
    pub fn append(&mut self, record: &ReviewRecord) -> Result<(), ExportError> {
        self.writer.serialize(record)
            .map_err(|e| ExportError::Serialize(e.to_string()))?;
        self.writer.flush()
            .map_err(|e| ExportError::Write(e.to_string()))?;

        Ok(())
    }
}

/// Build the catalog web search URL for a deferred row.
///
/// Falls back to the movie search when no kind hint was recognized; the
/// reviewer can flip to tv from there.
pub fn review_search_url(site_url: &str, title: &str, kind: Option<MediaKind>, year: Option<i32>) -> String {
    let kind = kind.map_or("movie", |k| k.as_str());

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("query", title);
    if let Some(year) = year {
        query.append_pair("year", &year.to_string());
    }

    format!("{}/search/{}?{}", site_url.trim_end_matches('/'), kind, query.finish())
}
