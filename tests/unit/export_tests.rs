/*!
 * Tests for the export writers
 */

use std::fs;

use crate::common;
use watchport::export::{ExportItem, ReviewRecord, ReviewWriter, WatchlistExport};
use watchport::normalize::MediaKind;

fn sample_record() -> ReviewRecord {
    ReviewRecord {
        original_title: "Twin Peaks (1990)".to_string(),
        clean_title: "Twin Peaks".to_string(),
        year_hint: Some(1990),
        media_type_hint: Some("tv".to_string()),
        status: "watchlist".to_string(),
        result_type: "AMBIGUOUS: PERFECT_TIE".to_string(),
        candidate_count: 2,
        candidates_json: r#"[{"id":1041},{"id":574}]"#.to_string(),
        suggested_url: "https://www.themoviedb.org/search/tv?query=Twin+Peaks&year=1990".to_string(),
    }
}

#[test]
fn test_reviewWriter_create_shouldWriteHeaderImmediately() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = temp_dir.path().join("manual_review.csv");

    let writer = ReviewWriter::create(&path).expect("Should create review file");
    drop(writer);

    // The header is on disk even though nothing was appended
    let content = fs::read_to_string(&path).expect("Review file should exist");
    assert_eq!(
        content.lines().next(),
        Some("original_title,clean_title,year_hint,media_type_hint,status,result_type,candidate_count,candidates_json,suggested_url")
    );
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_reviewWriter_append_shouldRoundTripThroughCsvReader() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = temp_dir.path().join("manual_review.csv");

    let mut writer = ReviewWriter::create(&path).expect("Should create review file");
    writer.append(&sample_record()).expect("Should append record");
    drop(writer);

    let mut reader = csv::Reader::from_path(&path).expect("Should open review file");
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("Rows should parse");

    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "Twin Peaks (1990)");
    assert_eq!(&rows[0][1], "Twin Peaks");
    assert_eq!(&rows[0][2], "1990");
    assert_eq!(&rows[0][3], "tv");
    assert_eq!(&rows[0][4], "watchlist");
    assert_eq!(&rows[0][5], "AMBIGUOUS: PERFECT_TIE");
    assert_eq!(&rows[0][6], "2");
    assert_eq!(&rows[0][7], r#"[{"id":1041},{"id":574}]"#);
    assert_eq!(&rows[0][8], "https://www.themoviedb.org/search/tv?query=Twin+Peaks&year=1990");
}

#[test]
fn test_reviewWriter_missingHints_shouldSerializeAsBlankCells() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = temp_dir.path().join("manual_review.csv");

    let mut record = sample_record();
    record.year_hint = None;
    record.media_type_hint = None;

    let mut writer = ReviewWriter::create(&path).expect("Should create review file");
    writer.append(&record).expect("Should append record");
    drop(writer);

    let mut reader = csv::Reader::from_path(&path).expect("Should open review file");
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("Rows should parse");

    assert_eq!(&rows[0][2], "");
    assert_eq!(&rows[0][3], "");
}

#[test]
fn test_reviewWriter_append_shouldFlushEachRowToDisk() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = temp_dir.path().join("manual_review.csv");

    let mut writer = ReviewWriter::create(&path).expect("Should create review file");
    writer.append(&sample_record()).expect("Should append record");

    // The row must be readable while the writer is still open, so an
    // interrupted run keeps everything deferred so far
    let content = fs::read_to_string(&path).expect("Review file should exist");
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_watchlistExport_writeTo_shouldProduceExpectedJsonShape() {
    let temp_dir = common::create_temp_dir().expect("Should create temp dir");
    let path = temp_dir.path().join("watchlist_export.json");

    let export = WatchlistExport::new(
        vec![ExportItem { id: 27205, kind: MediaKind::Movie }],
        vec![ExportItem { id: 2316, kind: MediaKind::Tv }],
        5,
        2,
    );
    export.write_to(&path).expect("Should write export");

    let content = fs::read_to_string(&path).expect("Export file should exist");
    let value: serde_json::Value = serde_json::from_str(&content).expect("Export should be valid JSON");

    assert_eq!(value["watchlist"][0]["id"], 27205);
    assert_eq!(value["watchlist"][0]["type"], "movie");
    assert_eq!(value["watchedlist"][0]["id"], 2316);
    assert_eq!(value["watchedlist"][0]["type"], "tv");
    assert_eq!(value["summary"]["total_processed"], 5);
    assert_eq!(value["summary"]["auto_added"], 2);
    assert_eq!(value["summary"]["manual_review"], 2);
    assert_eq!(value["summary"]["watchlist_count"], 1);
    assert_eq!(value["summary"]["watchedlist_count"], 1);
    assert!(value["generated_on"].is_string());
}

#[test]
fn test_watchlistExport_writeToBadPath_shouldReturnWriteError() {
    let export = WatchlistExport::new(vec![], vec![], 0, 0);
    let result = export.write_to("/nonexistent-dir/watchlist_export.json");
    assert!(result.is_err());
}
