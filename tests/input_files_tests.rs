// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Input handling: multiple files, missing files.

mod common;

use common::{data_row, element_texts};
use fitcsv2tcx::config::Config;
use fitcsv2tcx::services::convert;
use fitcsv2tcx::ConvertError;
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_csv(rows: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_files_are_concatenated_in_order() {
    let first = temp_csv(&[
        "type,local_number".to_string(),
        data_row("2020-01-01", "00:00:00", 0, 0, "5.0", "0.0", "100"),
        data_row("2020-01-01", "00:01:00", 100, 100, "5.0", "100.0", "110"),
    ]);
    let second = temp_csv(&[data_row(
        "2020-01-01",
        "00:02:00",
        200,
        200,
        "5.0",
        "200.0",
        "120",
    )]);

    let config = Config::default().with_inputs(vec![
        first.path().to_path_buf(),
        second.path().to_path_buf(),
    ]);
    let mut out = Vec::new();

    let report = convert(&config, &mut out).expect("conversion should succeed");
    let xml = String::from_utf8(out).unwrap();

    assert_eq!(report.samples_kept, 3);
    assert!(xml.contains("<TotalTimeSeconds>120</TotalTimeSeconds>"));
    assert_eq!(element_texts(&xml, "Value"), vec!["100", "110", "120"]);
}

#[test]
fn test_missing_file_fails_before_writing() {
    let present = temp_csv(&[data_row("2020-01-01", "00:00:00", 0, 0, "5.0", "0.0", "")]);
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");

    let config =
        Config::default().with_inputs(vec![present.path().to_path_buf(), missing.clone()]);
    let mut out = Vec::new();

    let err = convert(&config, &mut out).unwrap_err();

    match err {
        ConvertError::Input { path, .. } => assert_eq!(path, missing),
        other => panic!("expected input error, got {other:?}"),
    }
    assert!(out.is_empty(), "nothing should be written on open failure");
}
