// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log line formatting.
//!
//! Every line, whether in a rotated file or in the diagnostics file, has the
//! same shape:
//!
//! ```text
//! 2026-08-28 14:03:07.012345 [warn]  queue depth above watermark
//! ```
//!
//! The timestamp is local wall-clock time with microsecond precision; the tag
//! is fixed-width (see [`Level::tag`]).

use crate::level::Level;
use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Formats one newline-terminated log line.
pub(crate) fn format_line(at: DateTime<Local>, level: Level, message: &str) -> String {
    format!("{} {} {}\n", at.format(TIMESTAMP_FORMAT), level.tag(), message)
}
