use anyhow::{Result, Context};
use log::{warn, info, debug};
use std::path::Path;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::catalog::{Candidate, Catalog};
use crate::catalog::tmdb::TmdbCatalog;
use crate::export::{ExportItem, ReviewRecord, ReviewWriter, WatchlistExport, review_search_url};
use crate::matching::{decide, title_similarity, Decision};
use crate::normalize::{CleanedQuery, StatusBucket};
use crate::sheet_processor::{self, RawEntry};

// @module: Application controller for the import pipeline

/// Main application controller for the watchlist import
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Catalog the rows are resolved against
    catalog: Box<dyn Catalog>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let catalog = Box::new(TmdbCatalog::new(&config.catalog));
        Ok(Self { config, catalog })
    }

    /// Create a controller with a custom catalog, used by tests
    pub fn with_catalog(config: Config, catalog: Box<dyn Catalog>) -> Self {
        Self { config, catalog }
    }

    /// Run the import over the configured input sheet.
    ///
    /// Every non-blank row ends in exactly one place: one of the two
    /// export lists or the review file. Catalog failures demote a row to
    /// zero candidates instead of aborting the run.
    pub async fn run(&self) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        let input_path = Path::new(&self.config.input.path);
        if !input_path.exists() {
            return Err(anyhow::anyhow!("Input sheet does not exist: {:?}", input_path));
        }

        let entries = sheet_processor::read_entries(input_path, &self.config.input)
            .context("Failed to read the input sheet")?;
        info!("🚀 watchport: {} rows from {}", entries.len(), input_path.display());

        // The review file exists from the start, even if nothing lands in it
        let mut review_writer = ReviewWriter::create(&self.config.output.review_csv)
            .context("Failed to create the manual review file")?;

        let mut watchlist: Vec<ExportItem> = Vec::new();
        let mut watchedlist: Vec<ExportItem> = Vec::new();
        let mut review_count = 0_usize;
        let mut blank_count = 0_usize;

        // Create a progress bar for resolution tracking
        let progress_bar = ProgressBar::new(entries.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} titles ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        for entry in &entries {
            if entry.is_blank() {
                blank_count += 1;
                progress_bar.inc(1);
                continue;
            }

            let query = CleanedQuery::from_entry(entry);
            progress_bar.set_message(query.title.clone());
            debug!("Processing: '{}'", query.title);
            if let Some(year) = query.year_hint {
                debug!("  Year hint: {}", year);
            }
            if let Some(kind) = query.kind_hint {
                debug!("  Kind hint: {}", kind);
            }

            let candidates = match self.catalog.search(&query).await {
                Ok(candidates) => candidates,
                Err(e) => {
                    warn!("Catalog search failed for '{}': {}", query.title, e);
                    Vec::new()
                }
            };

            if candidates.len() > 1 {
                self.log_similarity_breakdown(&query, &candidates);
            }

            match decide(&query, &candidates, &self.config.decision) {
                Decision::Accept { candidate, reason } => {
                    let item = ExportItem::from_candidate(&candidate);
                    match query.status {
                        StatusBucket::Watchlist => watchlist.push(item),
                        StatusBucket::Watchedlist => watchedlist.push(item),
                    }
                    info!(
                        "✅ Added to {}: '{}' ({}) [id {}] - {}",
                        query.status,
                        candidate.display_title(),
                        candidate.year.map_or("N/A".to_string(), |y| y.to_string()),
                        candidate.id,
                        reason
                    );
                }
                Decision::Defer { reason, .. } => {
                    let result_type = if candidates.is_empty() {
                        "NOT FOUND".to_string()
                    } else {
                        format!("AMBIGUOUS: {}", reason)
                    };
                    warn!(
                        "Manual review: '{}' - {} ({} candidates)",
                        query.title,
                        result_type,
                        candidates.len()
                    );

                    let record = self.review_record(entry, &query, &candidates, result_type)?;
                    review_writer.append(&record)
                        .context("Failed to append to the manual review file")?;
                    review_count += 1;
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        // Blank rows count as processed, they just resolve to nothing
        let export = WatchlistExport::new(watchlist, watchedlist, entries.len(), review_count);
        export.write_to(&self.config.output.watchlist_json)
            .context("Failed to write the watchlist export")?;

        let elapsed = start_time.elapsed();
        info!("Processing complete in {}", Self::format_duration(elapsed));
        info!("  Rows processed: {} ({} blank skipped)", export.summary.total_processed, blank_count);
        info!(
            "  Auto-added: {} ({} watchlist, {} watchedlist)",
            export.summary.auto_added,
            export.summary.watchlist_count,
            export.summary.watchedlist_count
        );
        info!("  Manual review: {}", export.summary.manual_review);
        info!("  Export file: {}", self.config.output.watchlist_json);
        info!("  Review file: {}", self.config.output.review_csv);
        if export.summary.manual_review > 0 {
            info!("  Review rows carry candidate details and a primed catalog search URL");
        }

        Ok(())
    }

    /// Debug dump of the raw similarity of the top catalog results
    fn log_similarity_breakdown(&self, query: &CleanedQuery, candidates: &[Candidate]) {
        if log::max_level() < log::LevelFilter::Debug {
            return;
        }

        debug!("  Similarity analysis for: '{}'", query.title);
        let query_title = query.title.to_lowercase();
        for (index, candidate) in candidates.iter().take(3).enumerate() {
            let candidate_title = candidate.display_title();
            let ratio = title_similarity(&query_title, &candidate_title.to_lowercase());
            debug!("    {}. '{}' - similarity: {:.3}", index + 1, candidate_title, ratio);
        }
    }

    /// Assemble the review row for one deferred entry
    fn review_record(
        &self,
        entry: &RawEntry,
        query: &CleanedQuery,
        candidates: &[Candidate],
        result_type: String,
    ) -> Result<ReviewRecord> {
        let candidates_json = serde_json::to_string(candidates)
            .context("Failed to serialize candidates for the review file")?;

        Ok(ReviewRecord {
            original_title: entry.title.clone(),
            clean_title: query.title.clone(),
            year_hint: query.year_hint,
            media_type_hint: query.kind_hint.map(|k| k.as_str().to_string()),
            status: query.status.as_str().to_string(),
            result_type,
            candidate_count: candidates.len(),
            candidates_json,
            suggested_url: review_search_url(
                &self.config.catalog.site_url,
                &query.title,
                query.kind_hint,
                query.year_hint,
            ),
        })
    }

    /// Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
