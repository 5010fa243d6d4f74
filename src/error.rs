// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the conversion pipeline.
//!
//! Malformed rows and GPS outliers are filtered, not reported, so the only
//! failures that reach callers are I/O and configuration problems.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Conversion error type.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open input {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ConvertError {
    /// Wrap an open failure with the offending path.
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Input {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for the pipeline
pub type Result<T> = std::result::Result<T, ConvertError>;
