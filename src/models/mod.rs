// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the converter.

pub mod sample;
pub mod track;

pub use sample::{semicircles_to_degrees, Sample};
pub use track::{ActivitySummary, Track};
