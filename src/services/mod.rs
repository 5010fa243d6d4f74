// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the conversion pipeline stages.

pub mod convert;
pub mod filter;
pub mod parser;
pub mod tcx;

pub use convert::{convert, convert_reader, ConversionReport};
pub use filter::{filter_jumps, JumpFilter, MAX_JUMP_DEGREES};
pub use parser::RecordParser;
pub use tcx::{write_tcx, TcxWriter};
