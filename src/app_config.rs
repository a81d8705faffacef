use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Input sheet settings
    #[serde(default)]
    pub input: InputConfig,

    /// Catalog API settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Auto-select decision thresholds
    #[serde(default)]
    pub decision: DecisionConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Input sheet configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InputConfig {
    // @field: Path to the sheet file
    #[serde(default = "default_input_path")]
    pub path: String,

    // @field: Column holding the free-text title
    #[serde(default = "default_title_column")]
    pub title_column: String,

    // @field: Column holding the movie/show hint
    #[serde(default = "default_kind_column")]
    pub kind_column: String,

    // @field: Column holding the watched/to-watch status
    #[serde(default = "default_status_column")]
    pub status_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            title_column: default_title_column(),
            kind_column: default_kind_column(),
            status_column: default_status_column(),
        }
    }
}

/// Catalog API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: API base URL
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,

    // @field: Public site URL used for manual review links
    #[serde(default = "default_catalog_site_url")]
    pub site_url: String,

    // @field: Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Delay between consecutive searches in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_catalog_base_url(),
            site_url: default_catalog_site_url(),
            timeout_secs: default_timeout_secs(),
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

/// Output file configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    // @field: Path of the JSON export consumed by the web app
    #[serde(default = "default_watchlist_json")]
    pub watchlist_json: String,

    // @field: Path of the manual review CSV
    #[serde(default = "default_review_csv")]
    pub review_csv: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            watchlist_json: default_watchlist_json(),
            review_csv: default_review_csv(),
        }
    }
}

/// Popularity thresholds for the auto-select decision rules
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DecisionConfig {
    /// Minimum popularity lead of the most popular candidate over the
    /// runner-up before popularity alone can settle a row
    #[serde(default = "default_popularity_gap")]
    pub popularity_gap: f64,

    /// Minimum absolute popularity for the popularity-difference rule
    #[serde(default = "default_min_popularity_for_auto_select")]
    pub min_popularity_for_auto_select: f64,

    /// Popularity above which a decent similarity score is accepted
    #[serde(default = "default_high_popularity")]
    pub high_popularity: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            popularity_gap: default_popularity_gap(),
            min_popularity_for_auto_select: default_min_popularity_for_auto_select(),
            high_popularity: default_high_popularity(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_input_path() -> String {
    "my_watchlist_data.csv".to_string()
}

fn default_title_column() -> String {
    "Title".to_string()
}

fn default_kind_column() -> String {
    "Movie/Show".to_string()
}

fn default_status_column() -> String {
    "Status".to_string()
}

fn default_catalog_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_catalog_site_url() -> String {
    "https://www.themoviedb.org".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_request_delay_ms() -> u64 {
    300 // Keeps the search rate polite toward the catalog API
}

fn default_watchlist_json() -> String {
    "watchlist_export.json".to_string()
}

fn default_review_csv() -> String {
    "manual_review.csv".to_string()
}

fn default_popularity_gap() -> f64 {
    3.0
}

fn default_min_popularity_for_auto_select() -> f64 {
    15.0
}

fn default_high_popularity() -> f64 {
    50.0
}

impl Config {

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.catalog.api_key.is_empty() {
            return Err(anyhow!("Catalog API key is required, set catalog.api_key in the config file"));
        }

        if self.input.title_column.is_empty() {
            return Err(anyhow!("Input title column name must not be empty"));
        }

        if self.output.watchlist_json.is_empty() || self.output.review_csv.is_empty() {
            return Err(anyhow!("Output file paths must not be empty"));
        }

        Ok(())
    }

}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input: InputConfig::default(),
            catalog: CatalogConfig::default(),
            output: OutputConfig::default(),
            decision: DecisionConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
