// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
The logger's own log.

Rotation failures and file-creation events have to be recorded somewhere, and
the rotated files themselves are the wrong place: a failed rotation is exactly
the moment they can't be written. Each writer therefore keeps one fixed-name
`logs.log` file at the directory root, outside the rotation scheme, and
appends internal events there best-effort. An append that fails is dropped
silently; diagnostics never take down a caller's emit.
*/

use crate::error::Error;
use crate::format::format_line;
use crate::level::Level;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Fixed name of the diagnostics file, shared by every writer pointed at the
/// same directory.
pub(crate) const DIAGNOSTICS_FILE_NAME: &str = "logs.log";

/// Best-effort appender for the logger's internal events.
#[derive(Debug)]
pub(crate) struct Diagnostics {
    file: File,
}

impl Diagnostics {
    /// Opens `logs.log` under `directory` for append, creating it on first
    /// use.
    pub(crate) fn open(directory: &Path) -> Result<Self, Error> {
        let path = directory.join(DIAGNOSTICS_FILE_NAME);
        let file = match OpenOptions::new().append(true).open(&path) {
            Ok(file) => file,
            Err(_) => File::create(&path).map_err(|source| Error::OpenFile { path, source })?,
        };
        Ok(Self { file })
    }

    /// Appends one line in the standard format. Failures are swallowed.
    pub(crate) fn report(&self, level: Level, message: &str) {
        let line = format_line(chrono::Local::now(), level, message);
        // Write through a shared reference; appends are atomic enough for a
        // best-effort internal log.
        let _ = (&self.file).write_all(line.as_bytes());
    }

    /// Records that a rotated file was created.
    pub(crate) fn note_created(&self, path: &Path) {
        self.report(Level::Logs, &format!("create {} success", path.display()));
    }
}
