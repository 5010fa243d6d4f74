// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! fitcsv2tcx: turn FIT-to-CSV tracker exports into TCX activities
//!
//! The pipeline is [`services::RecordParser`] → [`services::JumpFilter`] →
//! [`services::TcxWriter`], tied together by [`services::convert`].

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use error::{ConvertError, Result};
