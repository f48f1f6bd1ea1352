// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
The public writer surface.

A [`LogWriter`] owns one [`FileState`] behind a mutex and one
[`Diagnostics`] appender. Emitting a message formats it once, then holds the
lock across both the rotation decision and the byte append, so two concurrent
emitters can never jointly overflow a file and a rotation triggered by one
caller is fully visible before any other caller proceeds.

All I/O is synchronous and blocking; there is no buffering, no retry queue,
and no cancellation. An emit either returns `Ok` with the line durably
appended to exactly one file, or an error with the line not written.
*/

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::Error;
use crate::file_state::FileState;
use crate::format::format_line;
use crate::level::Level;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// A leveled, size-rotating file logger.
///
/// `LogWriter` is `Send + Sync`; share one across threads by reference or in
/// an `Arc`. Each writer owns its directory and its rotation state outright,
/// so multiple independent writers can coexist in one process.
#[derive(Debug)]
pub struct LogWriter {
    state: Mutex<FileState>,
    diagnostics: Diagnostics,
}

impl LogWriter {
    /// Creates a writer over `directory`, creating the directory if needed.
    ///
    /// Opens the fixed-name diagnostics file, applies the documented defaults
    /// to zero-valued `config` fields, and reconstructs rotation state from
    /// any files a prior run left behind (see the crate-level documentation
    /// for the resume rules).
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be created or the diagnostics or
    /// active log file cannot be opened.
    pub fn new(directory: impl Into<PathBuf>, config: Config) -> Result<Self, Error> {
        let directory = directory.into();
        if !directory.is_dir() {
            fs::create_dir_all(&directory).map_err(|source| Error::CreateDirectory {
                path: directory.clone(),
                source,
            })?;
        }
        let diagnostics = Diagnostics::open(&directory)?;
        let config = config.verify(directory);
        let state = FileState::initialize(config, &diagnostics)?;
        Ok(Self {
            state: Mutex::new(state),
            diagnostics,
        })
    }

    /// Formats and durably appends one message at the given level.
    ///
    /// On success the line landed in exactly one numbered file. On error the
    /// line was not written to any rotated file (a rotation failure has
    /// already been recorded in the diagnostics file); the caller decides
    /// whether to retry or drop.
    pub fn emit(&self, level: Level, message: &str) -> Result<(), Error> {
        let line = format_line(chrono::Local::now(), level, message);
        // A line past u32::MAX saturates, which simply forces a rotation.
        let n = u32::try_from(line.len()).unwrap_or(u32::MAX);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let handle = state.reserve(n, &self.diagnostics)?;
        handle.write_all(line.as_bytes()).map_err(Error::Write)
    }

    /// Emits at [`Level::Debug`].
    pub fn debug(&self, message: &str) -> Result<(), Error> {
        self.emit(Level::Debug, message)
    }

    /// Emits at [`Level::Info`].
    pub fn info(&self, message: &str) -> Result<(), Error> {
        self.emit(Level::Info, message)
    }

    /// Emits at [`Level::Warn`].
    pub fn warn(&self, message: &str) -> Result<(), Error> {
        self.emit(Level::Warn, message)
    }

    /// Emits at [`Level::Error`].
    pub fn error(&self, message: &str) -> Result<(), Error> {
        self.emit(Level::Error, message)
    }
}

/*
Boilerplate notes.

# LogWriter

Clone is out: the writer owns an exclusive file handle and the rotation
bookkeeping; two clones would double-count sizes. Callers who want sharing
wrap it in Arc.
PartialEq/Eq/Hash make no sense for a handle-owning type.
Default is not sensible; a writer needs a directory.
Send/Sync hold automatically: Mutex<FileState> plus an append-only File.
*/
