//! Converter configuration loaded from environment variables.
//!
//! Command-line flags take precedence; see [`crate::cli`].

use std::env;
use std::path::PathBuf;

/// Environment variable holding the default timezone offset in seconds.
pub const TZ_OFFSET_VAR: &str = "TCX_TZ_OFFSET";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Converter configuration, resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Seconds the device clock runs ahead of UTC; subtracted from every row
    pub tz_offset_seconds: i64,
    /// CSV sources, read in order. Empty (or `-`) means stdin.
    pub inputs: Vec<PathBuf>,
    /// Emit JSON log lines on stderr instead of text
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let tz_offset_seconds = match env::var(TZ_OFFSET_VAR) {
            Ok(raw) => parse_offset(&raw)?,
            Err(_) => 0,
        };

        let log_json = env::var(LOG_FORMAT_VAR)
            .map(|v| v.trim().eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            tz_offset_seconds,
            inputs: Vec::new(),
            log_json,
        })
    }

    /// Override the timezone offset if one was given explicitly.
    pub fn with_tz_offset(mut self, offset: Option<i64>) -> Self {
        if let Some(offset) = offset {
            self.tz_offset_seconds = offset;
        }
        self
    }

    /// Replace the list of input sources.
    pub fn with_inputs(mut self, inputs: Vec<PathBuf>) -> Self {
        self.inputs = inputs;
        self
    }
}

fn parse_offset(raw: &str) -> Result<i64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var: TZ_OFFSET_VAR,
        value: raw.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} (expected integer seconds)")]
    Invalid { var: &'static str, value: String },
}
