// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! fitcsv2tcx command-line entry point.
//!
//! Writes the TCX document to stdout; all logging goes to stderr.

use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use fitcsv2tcx::{cli::Cli, config::Config, services};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment, then let flags override it
    let config = cli.apply(Config::from_env().context("Failed to load configuration")?);
    init_logging(config.log_json);

    tracing::debug!(
        tz_offset = config.tz_offset_seconds,
        inputs = config.inputs.len(),
        "Starting conversion"
    );

    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());
    services::convert(&config, output).context("Conversion failed")?;

    Ok(())
}

/// Initialize logging on stderr, JSON or compact text.
fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fitcsv2tcx=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_target(false),
            )
            .init();
    }
}
