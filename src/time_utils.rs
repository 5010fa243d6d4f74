// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Build a UTC timestamp from device-local calendar fields.
///
/// The fields are read as if they were UTC, then `tz_offset_seconds` is
/// subtracted. Returns `None` for impossible dates or times.
pub fn device_time_to_utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    tz_offset_seconds: i64,
) -> Option<DateTime<Utc>> {
    let naive: NaiveDateTime =
        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
    let offset = Duration::try_seconds(tz_offset_seconds)?;
    naive.and_utc().checked_sub_signed(offset)
}
