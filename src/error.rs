// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type for the rotlog logging system.
//!
//! All file-system failures are local to the operation that caused them; none
//! of them panic or crash the process. A failed emit leaves the writer in a
//! consistent state and the caller decides whether to retry or drop the
//! message.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in this crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// The log directory is missing and could not be created. Fatal to writer
    /// construction; nothing is written to the diagnostics file.
    #[error("can't create log directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log directory exists but could not be listed during the resume
    /// scan.
    #[error("can't read log directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A numbered log file could not be opened or created, either at writer
    /// construction or during a rotation.
    #[error("can't open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An append to the active log file failed. The message was not durably
    /// recorded.
    #[error("can't write to log file: {0}")]
    Write(#[source] std::io::Error),

    /// Every serial number up to 255 has been used. Rotated file names carry
    /// an 8-bit serial and there is no wraparound or archival policy past the
    /// cap.
    #[error("log file serial numbers exhausted (cap is {})", u8::MAX)]
    SerialNumbersExhausted,
}
