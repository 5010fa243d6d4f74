// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use fitcsv2tcx::services::{convert_reader, ConversionReport};
use std::path::PathBuf;

/// Path to a CSV fixture under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run the pipeline over an in-memory CSV and return the XML.
#[allow(dead_code)]
pub fn convert_str(csv: &str, tz_offset_seconds: i64) -> (ConversionReport, String) {
    let mut out = Vec::new();
    let report =
        convert_reader(csv.as_bytes(), &mut out, tz_offset_seconds).expect("conversion failed");
    (report, String::from_utf8(out).expect("TCX output should be UTF-8"))
}

/// Build a record row with the given fields and fixed filler columns.
#[allow(dead_code)]
pub fn data_row(
    date: &str,
    time: &str,
    lat_semicircles: i64,
    lon_semicircles: i64,
    altitude: &str,
    distance: &str,
    heart_rate: &str,
) -> String {
    format!(
        "data,0,{date},{time},{lat_semicircles},{lon_semicircles},3,{altitude},0.0,{distance},{heart_rate},20.0,0"
    )
}

/// Extract the text of every `<tag>...</tag>` occurrence, in order.
#[allow(dead_code)]
pub fn element_texts<'a>(xml: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    xml.match_indices(&open)
        .filter_map(|(start, _)| {
            let rest = &xml[start + open.len()..];
            rest.find(&close).map(|end| &rest[..end])
        })
        .collect()
}
