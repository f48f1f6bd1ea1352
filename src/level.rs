// SPDX-License-Identifier: MIT OR Apache-2.0
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Internal events of the logger itself, recorded in the diagnostics file
    Logs,
    /// Print-style debugging
    Debug,
    /// Routine operational messages
    Info,
    /// Suspicious condition
    Warn,
    /// Runtime error
    Error,
    /// Programmer error
    Panic,
}

impl Level {
    /// The tag written into each log line.
    ///
    /// All tags are padded to seven bytes so the message column lines up
    /// across levels.
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Logs => "[logs] ",
            Level::Debug => "[debug]",
            Level::Info => "[info] ",
            Level::Warn => "[warn] ",
            Level::Error => "[error]",
            Level::Panic => "[panic]",
        }
    }
}
