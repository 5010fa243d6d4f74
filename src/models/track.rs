// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Filtered track and its activity summary.

use chrono::{DateTime, Utc};

use crate::models::Sample;

/// Ordered samples that survived the jump filter.
///
/// Adjacent samples differ by less than one degree in latitude and in
/// longitude. Build one with [`Track::from_samples`] to get that guarantee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub(crate) samples: Vec<Sample>,
}

/// Lap totals derived from a track's first and last samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivitySummary {
    pub start_time: DateTime<Utc>,
    /// Whole seconds between the first and last sample
    pub total_time_seconds: i64,
    /// Cumulative distance of the last sample
    pub total_distance_meters: f64,
}

impl Track {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Summary totals, or `None` when there are fewer than two samples.
    pub fn summary(&self) -> Option<ActivitySummary> {
        let (first, last) = match self.samples.as_slice() {
            [first, .., last] => (first, last),
            _ => return None,
        };

        Some(ActivitySummary {
            start_time: first.timestamp,
            total_time_seconds: (last.timestamp - first.timestamp).num_seconds(),
            total_distance_meters: last.distance,
        })
    }
}
