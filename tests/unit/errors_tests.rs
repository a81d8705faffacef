/*!
 * Tests for error types and conversions
 */

use watchport::errors::{AppError, CatalogError, ExportError, SheetError};

#[test]
fn test_catalogError_requestFailed_shouldDisplayCorrectly() {
    let error = CatalogError::RequestFailed("Connection timeout".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Catalog request failed"));
    assert!(display.contains("Connection timeout"));
}

#[test]
fn test_catalogError_parseError_shouldDisplayCorrectly() {
    let error = CatalogError::ParseError("Invalid JSON".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to parse catalog response"));
    assert!(display.contains("Invalid JSON"));
}

#[test]
fn test_catalogError_apiError_shouldDisplayStatusAndMessage() {
    let error = CatalogError::ApiError {
        status_code: 429,
        message: "Too many requests".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("429"));
    assert!(display.contains("Too many requests"));
}

#[test]
fn test_sheetError_missingColumn_shouldDisplayColumnName() {
    let error = SheetError::MissingColumn("Title".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Missing required column"));
    assert!(display.contains("Title"));
}

#[test]
fn test_sheetError_malformedRow_shouldDisplayRowNumber() {
    let error = SheetError::MalformedRow {
        row: 42,
        message: "unexpected quote".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("42"));
    assert!(display.contains("unexpected quote"));
}

#[test]
fn test_exportError_write_shouldDisplayCorrectly() {
    let error = ExportError::Write("Disk full".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to write export"));
    assert!(display.contains("Disk full"));
}

#[test]
fn test_appError_fromCatalogError_shouldWrapCorrectly() {
    let catalog_error = CatalogError::RequestFailed("Test error".to_string());
    let app_error: AppError = catalog_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Catalog error"));
}

#[test]
fn test_appError_fromSheetError_shouldWrapCorrectly() {
    let sheet_error = SheetError::Read("No such file".to_string());
    let app_error: AppError = sheet_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Sheet error"));
    assert!(display.contains("No such file"));
}

#[test]
fn test_appError_fromExportError_shouldWrapCorrectly() {
    let export_error = ExportError::Serialize("recursion limit".to_string());
    let app_error: AppError = export_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Export error"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhowError_shouldWrapAsUnknown() {
    let anyhow_error = anyhow::anyhow!("Something went wrong");
    let app_error: AppError = anyhow_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}

#[test]
fn test_appError_file_shouldDisplayCorrectly() {
    let error = AppError::File("Permission denied".to_string());
    let display = format!("{}", error);
    assert!(display.contains("File error"));
    assert!(display.contains("Permission denied"));
}

#[test]
fn test_catalogError_debug_shouldBeImplemented() {
    let error = CatalogError::RequestFailed("test".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("RequestFailed"));
}

#[test]
fn test_sheetError_debug_shouldBeImplemented() {
    let error = SheetError::MissingColumn("test".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("MissingColumn"));
}

#[test]
fn test_appError_debug_shouldBeImplemented() {
    let error = AppError::File("test".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("File"));
}
