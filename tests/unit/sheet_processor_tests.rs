/*!
 * Tests for sheet ingestion from real files
 */

use crate::common;
use watchport::app_config::InputConfig;
use watchport::errors::SheetError;
use watchport::sheet_processor::read_entries;

#[test]
fn test_readEntries_standardSheet_shouldReturnRowsInOrder() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = common::create_test_sheet(
        &temp_dir.path().to_path_buf(),
        "history.csv",
        &[
            ("Inception (2010)", "Movie", "Watched"),
            ("The Office", "Show", "Watching"),
            ("Heat", "", ""),
        ],
    ).expect("Should create sheet");

    let entries = read_entries(&path, &InputConfig::default()).expect("Sheet should parse");

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title, "Inception (2010)");
    assert_eq!(entries[0].kind_hint, "Movie");
    assert_eq!(entries[0].status_hint, "Watched");
    assert_eq!(entries[1].title, "The Office");
    assert_eq!(entries[2].title, "Heat");
    assert_eq!(entries[2].kind_hint, "");
}

#[test]
fn test_readEntries_reorderedColumns_shouldFollowHeaderNames() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "reordered.csv",
        "Status,Movie/Show,Title\nWatched,Movie,Heat\n",
    ).expect("Should create sheet");

    let entries = read_entries(&path, &InputConfig::default()).expect("Sheet should parse");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Heat");
    assert_eq!(entries[0].kind_hint, "Movie");
    assert_eq!(entries[0].status_hint, "Watched");
}

#[test]
fn test_readEntries_missingTitleColumn_shouldError() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "no_title.csv",
        "Name,Status\nHeat,Watched\n",
    ).expect("Should create sheet");

    let result = read_entries(&path, &InputConfig::default());
    match result {
        Err(SheetError::MissingColumn(column)) => assert_eq!(column, "Title"),
        other => panic!("expected missing column error, got {:?}", other),
    }
}

#[test]
fn test_readEntries_blankTitleRows_shouldBeKeptForCounting() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = common::create_test_sheet(
        &temp_dir.path().to_path_buf(),
        "with_blanks.csv",
        &[
            ("Heat", "Movie", "Watched"),
            ("", "Movie", "Watched"),
            ("   ", "", ""),
        ],
    ).expect("Should create sheet");

    let entries = read_entries(&path, &InputConfig::default()).expect("Sheet should parse");

    // Blank rows stay in the list so the summary can count them
    assert_eq!(entries.len(), 3);
    assert!(!entries[0].is_blank());
    assert!(entries[1].is_blank());
    assert!(entries[2].is_blank());
}

#[test]
fn test_readEntries_raggedRows_shouldReadMissingCellsAsBlank() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "ragged.csv",
        "Title,Movie/Show,Status\nHeat\nFargo,Show\n",
    ).expect("Should create sheet");

    let entries = read_entries(&path, &InputConfig::default()).expect("Sheet should parse");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Heat");
    assert_eq!(entries[0].kind_hint, "");
    assert_eq!(entries[1].title, "Fargo");
    assert_eq!(entries[1].kind_hint, "Show");
    assert_eq!(entries[1].status_hint, "");
}

#[test]
fn test_readEntries_quotedTitleWithComma_shouldStayOneCell() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "quoted.csv",
        "Title,Movie/Show,Status\n\"Love, Actually\",Movie,Watched\n",
    ).expect("Should create sheet");

    let entries = read_entries(&path, &InputConfig::default()).expect("Sheet should parse");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Love, Actually");
}

#[test]
fn test_readEntries_missingFile_shouldReturnReadError() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = temp_dir.path().join("does_not_exist.csv");

    let result = read_entries(&path, &InputConfig::default());
    assert!(matches!(result, Err(SheetError::Read(_))));
}

#[test]
fn test_readEntries_customColumnNames_shouldUseConfiguredHeaders() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "custom.csv",
        "Name,Format,Seen\nDune,Movie,Yes\n",
    ).expect("Should create sheet");

    let config = InputConfig {
        title_column: "Name".to_string(),
        kind_column: "Format".to_string(),
        status_column: "Seen".to_string(),
        ..InputConfig::default()
    };
    let entries = read_entries(&path, &config).expect("Sheet should parse");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Dune");
    assert_eq!(entries[0].kind_hint, "Movie");
    assert_eq!(entries[0].status_hint, "Yes");
}
