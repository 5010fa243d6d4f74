// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end conversion: parse → filter → emit.
//!
//! The whole track is collected before anything is written, so a read error
//! aborts the conversion before any XML reaches the output.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ConvertError, Result};
use crate::models::{Sample, Track};
use crate::services::{write_tcx, RecordParser};

/// Counts from one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Rows that matched the record schema
    pub samples_parsed: usize,
    /// Samples left after the jump filter
    pub samples_kept: usize,
    /// Whether the document contains an activity
    pub activity_written: bool,
}

/// Convert CSV read from `reader` into a TCX document on `output`.
pub fn convert_reader<R, W>(
    reader: R,
    output: W,
    tz_offset_seconds: i64,
) -> Result<ConversionReport>
where
    R: BufRead,
    W: Write,
{
    let samples: Vec<Sample> = RecordParser::new(tz_offset_seconds)
        .samples(reader)
        .collect::<Result<_>>()?;
    let samples_parsed = samples.len();

    let track = Track::from_samples(samples);
    if track.len() < samples_parsed {
        tracing::info!(
            dropped = samples_parsed - track.len(),
            "Dropped samples with implausible position jumps"
        );
    }

    let activity_written = write_tcx(output, &track)?;
    if !activity_written {
        tracing::warn!(
            samples = track.len(),
            "Fewer than two usable samples, writing an empty activity list"
        );
    }

    Ok(ConversionReport {
        samples_parsed,
        samples_kept: track.len(),
        activity_written,
    })
}

/// Run the conversion described by `config`, writing the document to `output`.
///
/// Inputs are concatenated in order; no inputs or `-` means stdin.
pub fn convert<W: Write>(config: &Config, output: W) -> Result<ConversionReport> {
    let reader = open_inputs(&config.inputs)?;
    let report = convert_reader(reader, output, config.tz_offset_seconds)?;

    tracing::info!(
        parsed = report.samples_parsed,
        kept = report.samples_kept,
        activity = report.activity_written,
        tz_offset = config.tz_offset_seconds,
        "Conversion complete"
    );
    Ok(report)
}

/// Open every input up front so a missing file fails before any output.
fn open_inputs(inputs: &[PathBuf]) -> Result<Box<dyn BufRead>> {
    if inputs.is_empty() {
        return Ok(Box::new(io::stdin().lock()));
    }

    let mut chained: Box<dyn BufRead> = Box::new(io::empty());
    for path in inputs {
        let next = open_input(path)?;
        chained = Box::new(chained.chain(next));
    }
    Ok(chained)
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin().lock()));
    }

    tracing::debug!(path = %path.display(), "Opening input");
    let file = File::open(path).map_err(|e| ConvertError::input(path, e))?;
    Ok(Box::new(BufReader::new(file)))
}
