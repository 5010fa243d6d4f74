// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "fitcsv2tcx",
    about = "Convert a FIT-to-CSV export into a TCX activity on stdout",
    long_about = "Reads CSV rows exported by the FIT-to-CSV converter from the given files \
                  (or stdin), drops malformed rows and GPS jumps, and writes a TCX document \
                  to stdout."
)]
pub struct Cli {
    /// Seconds the device clock is ahead of UTC [env: TCX_TZ_OFFSET]
    #[arg(short = 't', long = "tz-offset", value_name = "SECONDS", allow_negative_numbers = true)]
    pub tz_offset: Option<i64>,

    /// CSV files to read; `-` or none reads stdin
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}

impl Cli {
    /// Merge the arguments over an environment-derived config.
    pub fn apply(self, config: Config) -> Config {
        config
            .with_tz_offset(self.tz_offset)
            .with_inputs(self.inputs)
    }
}
