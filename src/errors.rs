/*!
 * Error types for the watchport application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the metadata catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when making an API request fails
    #[error("Catalog request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse catalog response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("Catalog responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },
}

/// Errors that can occur while reading the input sheet
#[derive(Error, Debug)]
pub enum SheetError {
    /// Error opening or reading the sheet file
    #[error("Failed to read sheet: {0}")]
    Read(String),

    /// A configured column is missing from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A data row could not be parsed
    #[error("Malformed sheet row {row}: {message}")]
    MalformedRow {
        /// 1-based row number including the header
        row: usize,
        /// Parser message
        message: String
    },
}

/// Errors that can occur while writing output files
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error writing an output file
    #[error("Failed to write export: {0}")]
    Write(String),

    /// Error serializing export data
    #[error("Failed to serialize export data: {0}")]
    Serialize(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the catalog client
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error from sheet ingestion
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// Error from the export writers
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
