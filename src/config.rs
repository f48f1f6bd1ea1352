// SPDX-License-Identifier: MIT OR Apache-2.0

//! Writer configuration.
//!
//! A [`Config`] is a plain value: construct one with struct-update syntax off
//! [`Config::default`] and hand it to [`LogWriter::new`](crate::LogWriter::new).
//! Zero or empty fields mean "use the default", so a partially filled config
//! is always usable.

use std::path::PathBuf;

/// Rotation threshold applied when [`Config::max_size`] is zero: 100 MiB.
pub const DEFAULT_MAX_SIZE: u32 = 100 * (1 << 20);

/// Base file name applied when [`Config::file_name_prefix`] is empty.
pub const DEFAULT_FILE_NAME_PREFIX: &str = "storage";

const DEFAULT_SERIAL_NUMBER: u8 = 1;

/// Configuration for one [`LogWriter`](crate::LogWriter).
///
/// Immutable after the writer is constructed, except for `serial_number`,
/// which the rotation bookkeeping owns from then on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    /// Byte threshold that triggers rotation. Zero selects
    /// [`DEFAULT_MAX_SIZE`].
    pub max_size: u32,
    /// Advisory starting serial. Normally overwritten by the directory scan
    /// at writer construction.
    pub serial_number: u8,
    /// Base name shared by all rotated files. Empty selects
    /// [`DEFAULT_FILE_NAME_PREFIX`].
    pub file_name_prefix: String,
    /// Directory containing all files for this writer. Set from the writer
    /// constructor's argument.
    pub directory: PathBuf,
}

impl Config {
    /// Replaces zero-valued fields with their documented defaults and pins
    /// the directory, returning the effective configuration.
    pub(crate) fn verify(mut self, directory: PathBuf) -> Self {
        if self.serial_number == 0 {
            self.serial_number = DEFAULT_SERIAL_NUMBER;
        }
        if self.max_size == 0 {
            self.max_size = DEFAULT_MAX_SIZE;
        }
        if self.file_name_prefix.is_empty() {
            self.file_name_prefix = DEFAULT_FILE_NAME_PREFIX.to_string();
        }
        self.directory = directory;
        self
    }

    /// Path of the numbered file the writer currently appends to:
    /// `<directory>/<prefix><serial>.log`, decimal serial, no zero padding.
    pub(crate) fn active_file_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}{}.log", self.file_name_prefix, self.serial_number))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            serial_number: DEFAULT_SERIAL_NUMBER,
            file_name_prefix: DEFAULT_FILE_NAME_PREFIX.to_string(),
            directory: PathBuf::new(),
        }
    }
}

/*
Boilerplate notes for Config:

IMPLEMENTED:
- Debug/Clone: Derived - a config is plain data
- PartialEq/Eq/Hash: Derived - configs compare by value
- Default: Implemented - the documented defaults

NOT IMPLEMENTED:
- Copy: String and PathBuf are heap-allocated
- Ord/PartialOrd: no meaningful ordering between configs
- Display: no user-facing string form
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fields_take_defaults() {
        let config = Config {
            max_size: 0,
            serial_number: 0,
            file_name_prefix: String::new(),
            directory: PathBuf::new(),
        };
        let config = config.verify(PathBuf::from("/tmp/rotlog-test"));
        assert_eq!(config.max_size, DEFAULT_MAX_SIZE);
        assert_eq!(config.serial_number, 1);
        assert_eq!(config.file_name_prefix, DEFAULT_FILE_NAME_PREFIX);
        assert_eq!(config.directory, PathBuf::from("/tmp/rotlog-test"));
    }

    #[test]
    fn explicit_fields_survive_verify() {
        let config = Config {
            max_size: 4096,
            file_name_prefix: "events".to_string(),
            ..Config::default()
        };
        let config = config.verify(PathBuf::from("logs"));
        assert_eq!(config.max_size, 4096);
        assert_eq!(config.file_name_prefix, "events");
    }

    #[test]
    fn active_file_path_has_no_zero_padding() {
        let mut config = Config::default().verify(PathBuf::from("logs"));
        config.serial_number = 7;
        assert_eq!(
            config.active_file_path(),
            PathBuf::from("logs").join("storage7.log")
        );
    }
}
