// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Geographic jump filter.
//!
//! Devices that lose the satellite fix (tunnels, dense forest) sometimes
//! report one wildly wrong position when they reacquire it. A sample is kept
//! only if it is within [`MAX_JUMP_DEGREES`] of the last kept sample on both
//! axes. Rejected samples are dropped and never become the reference point.
//!
//! Longitude deltas are not wrapped, so a track crossing the antimeridian is
//! cut at the crossing.

use geo::Point;

use crate::models::{Sample, Track};

/// Largest allowed per-step change in latitude or longitude (exclusive).
pub const MAX_JUMP_DEGREES: f64 = 1.0;

/// Single-pass filter tracking the last accepted position.
#[derive(Debug, Clone, Default)]
pub struct JumpFilter {
    last: Option<Point<f64>>,
}

impl JumpFilter {
    /// Decide whether `sample` is kept, updating the reference on acceptance.
    pub fn accept(&mut self, sample: &Sample) -> bool {
        let Some(last) = self.last else {
            self.last = Some(sample.position);
            return true;
        };

        let delta = sample.position - last;
        if delta.y().abs() < MAX_JUMP_DEGREES && delta.x().abs() < MAX_JUMP_DEGREES {
            self.last = Some(sample.position);
            true
        } else {
            tracing::debug!(
                time = %sample.timestamp,
                dlat = delta.y(),
                dlon = delta.x(),
                "Dropping GPS jump"
            );
            false
        }
    }
}

/// Adapt a sample stream so only jump-free samples come through.
pub fn filter_jumps<I>(samples: I) -> impl Iterator<Item = Sample>
where
    I: IntoIterator<Item = Sample>,
{
    let mut filter = JumpFilter::default();
    samples.into_iter().filter(move |s| filter.accept(s))
}

impl Track {
    /// Build a track from parsed samples, dropping GPS jumps.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        Self {
            samples: filter_jumps(samples).collect(),
        }
    }
}
