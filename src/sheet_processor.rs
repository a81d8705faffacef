use std::path::Path;
use csv::StringRecord;
use log::debug;

use crate::app_config::InputConfig;
use crate::errors::SheetError;

// @module: Sheet row ingestion

// @struct: One raw sheet row prior to normalization
#[derive(Debug, Clone)]
pub struct RawEntry {
    // @field: Free-text title cell, may be blank
    pub title: String,

    // @field: Movie/show hint cell
    pub kind_hint: String,

    // @field: Watched/to-watch status cell
    pub status_hint: String,
}

impl RawEntry {
    /// A row with a blank title carries nothing to resolve
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }
}

// @struct: Column layout resolved against the sheet header
#[derive(Debug, Clone)]
pub struct SheetLayout {
    title_idx: usize,
    kind_idx: Option<usize>,
    status_idx: Option<usize>,
}

impl SheetLayout {
    // @creates: Layout from the header row
    // @validates: The title column must exist, hint columns are optional
    pub fn from_headers(headers: &StringRecord, config: &InputConfig) -> Result<Self, SheetError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let title_idx = find(&config.title_column)
            .ok_or_else(|| SheetError::MissingColumn(config.title_column.clone()))?;

        let kind_idx = find(&config.kind_column);
        let status_idx = find(&config.status_column);
        if kind_idx.is_none() {
            debug!("Sheet has no '{}' column, kind hints disabled", config.kind_column);
        }
        if status_idx.is_none() {
            debug!("Sheet has no '{}' column, every row goes to the watchlist", config.status_column);
        }

        Ok(Self { title_idx, kind_idx, status_idx })
    }

    /// Pick the configured cells out of one record, tolerating short rows
    fn entry_from_record(&self, record: &StringRecord) -> RawEntry {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i)).unwrap_or("").to_string()
        };

        RawEntry {
            title: cell(Some(self.title_idx)),
            kind_hint: cell(self.kind_idx),
            status_hint: cell(self.status_idx),
        }
    }
}

/// Read every row of the input sheet.
///
/// Blank-title rows are kept so the run summary can count them; the
/// pipeline skips them without a catalog search.
pub fn read_entries<P: AsRef<Path>>(path: P, config: &InputConfig) -> Result<Vec<RawEntry>, SheetError> {
    let path = path.as_ref();

    // Flexible mode tolerates ragged rows, missing trailing cells read as blank
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| SheetError::Read(format!("{}: {}", path.display(), e)))?;

    let headers = reader.headers()
        .map_err(|e| SheetError::Read(format!("{}: {}", path.display(), e)))?
        .clone();
    let layout = SheetLayout::from_headers(&headers, config)?;

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Header occupies row 1, data starts at row 2
        let record = record.map_err(|e| SheetError::MalformedRow {
            row: index + 2,
            message: e.to_string(),
        })?;
        entries.push(layout.entry_from_record(&record));
    }

    debug!("Read {} rows from {}", entries.len(), path.display());

    Ok(entries)
}
