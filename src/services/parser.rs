// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSV record parser.
//!
//! Only `data,0,...` rows of the converter's record schema produce samples.
//! Headers, definition rows, blank lines and rows whose altitude or distance
//! lack a decimal point are skipped without error. The decimal-point check
//! drops the bogus integer readings some devices emit when the fix is lost.

use std::io::BufRead;
use std::sync::LazyLock;

use geo::Point;
use regex::{Captures, Regex};

use crate::error::Result;
use crate::models::{semicircles_to_degrees, Sample};
use crate::time_utils::device_time_to_utc;

/// `data,0,date,time,lat,lon,_,altitude,_,distance,hr[,temperature][,extra]...`
static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^data,0,",
        r"(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2}),",
        r"(?P<hour>\d{2}):(?P<minute>\d{2}):(?P<second>\d{2}),",
        r"(?P<lat>-?\d+),(?P<lon>-?\d+),",
        r"[^,]*,",
        r"(?P<altitude>-?\d+\.\d+),",
        r"-?\d+(?:\.\d+)?,",
        r"(?P<distance>-?\d+\.\d+),",
        r"(?P<hr>\d*)",
        r"(?:,(?P<temperature>-?\d+(?:\.\d+)?)?)?",
        r"(?:,\d*)?",
        r"(?:,.*)?$",
    ))
    .expect("record pattern is valid")
});

/// Turns CSV lines into [`Sample`]s, correcting timestamps by a fixed offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser {
    tz_offset_seconds: i64,
}

impl RecordParser {
    pub fn new(tz_offset_seconds: i64) -> Self {
        Self { tz_offset_seconds }
    }

    /// Parse one line, or `None` if it is not a usable record.
    pub fn parse_line(&self, line: &str) -> Option<Sample> {
        let caps = RECORD_RE.captures(line.trim_end())?;

        let timestamp = device_time_to_utc(
            field(&caps, "year")?,
            field(&caps, "month")?,
            field(&caps, "day")?,
            field(&caps, "hour")?,
            field(&caps, "minute")?,
            field(&caps, "second")?,
            self.tz_offset_seconds,
        )?;

        let lat = semicircles_to_degrees(field(&caps, "lat")?);
        let lon = semicircles_to_degrees(field(&caps, "lon")?);

        Some(Sample {
            timestamp,
            position: Point::new(lon, lat),
            altitude: field(&caps, "altitude")?,
            distance: field(&caps, "distance")?,
            heart_rate: field(&caps, "hr"),
            temperature: field(&caps, "temperature"),
        })
    }

    /// Lazily parse every record line from `reader`.
    ///
    /// Read failures are yielded as `Err` items; callers treat them as fatal.
    pub fn samples<R: BufRead>(&self, reader: R) -> impl Iterator<Item = Result<Sample>> {
        let parser = *self;
        reader.lines().filter_map(move |line| match line {
            Ok(line) => {
                let sample = parser.parse_line(&line);
                if sample.is_none() {
                    tracing::trace!(line = %line, "Skipping non-record line");
                }
                sample.map(Ok)
            }
            Err(e) => Some(Err(e.into())),
        })
    }
}

/// Parse a named capture group. Empty or missing groups yield `None`.
fn field<T: std::str::FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}
