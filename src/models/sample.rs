// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trackpoint sample model.

use chrono::{DateTime, Utc};
use geo::Point;

/// Semicircles per degree: the full ±180° range maps onto ±2^31.
pub const SEMICIRCLES_PER_DEGREE: f64 = 2_147_483_648.0 / 180.0;

/// Convert a semicircle-encoded coordinate to decimal degrees.
pub fn semicircles_to_degrees(semicircles: i64) -> f64 {
    semicircles as f64 / SEMICIRCLES_PER_DEGREE
}

/// One timestamped trackpoint candidate read from a CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Corrected UTC time of the fix
    pub timestamp: DateTime<Utc>,
    /// Position in degrees (x = longitude, y = latitude)
    pub position: Point<f64>,
    /// Altitude in meters
    pub altitude: f64,
    /// Cumulative distance in meters
    pub distance: f64,
    /// Heart rate in bpm, if the row carried one
    pub heart_rate: Option<u32>,
    /// Device temperature; parsed but never written out
    pub temperature: Option<f64>,
}

impl Sample {
    pub fn latitude(&self) -> f64 {
        self.position.y()
    }

    pub fn longitude(&self) -> f64 {
        self.position.x()
    }
}
