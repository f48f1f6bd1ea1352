// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Rotation bookkeeping for one writer.

[`FileState`] owns the active log file, the number of bytes written into it,
and the serial number embedded in its name. Every emit funnels through
[`FileState::reserve`], which decides whether the current file can absorb the
message or a new numbered file must be opened first. On process restart,
[`FileState::initialize`] reconstructs that state from whatever a prior run
left in the directory, so writing resumes into a half-full file instead of
starting a fresh serial on every boot.

`FileState` has no lock of its own; the owning [`LogWriter`](crate::LogWriter)
serializes access so the size check and the byte append are atomic with
respect to other emitters.
*/

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::Error;
use crate::level::Level;
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Mutable rotation state: current size, active handle, and the config whose
/// `serial_number` this type is the sole mutator of.
#[derive(Debug)]
pub(crate) struct FileState {
    current_size: u32,
    handle: File,
    config: Config,
}

impl FileState {
    /// Scans the configured directory to seed the serial number and resume
    /// size, then opens the active file for append.
    ///
    /// The scan counts entries whose name contains the file name prefix and
    /// seeds the serial as one more than that count. If the last matching
    /// entry in name order is still below the size limit, the serial is
    /// pulled back by one and writing resumes into that file at its on-disk
    /// size; otherwise the fresh serial starts at size zero.
    pub(crate) fn initialize(config: Config, diagnostics: &Diagnostics) -> Result<Self, Error> {
        let (serial_number, resume_size) = scan_directory(&config)?;
        let mut config = config;
        config.serial_number = serial_number;

        let path = config.active_file_path();
        let handle = match OpenOptions::new().append(true).open(&path) {
            Ok(handle) => handle,
            Err(_) => create_log_file(&path, diagnostics)?,
        };
        Ok(Self {
            current_size: resume_size,
            handle,
            config,
        })
    }

    /// Reserves room for `n` more bytes, rotating first when the active file
    /// can't absorb them, and returns the handle the bytes belong in.
    ///
    /// A message longer than the size limit still lands whole in a freshly
    /// rotated file; that one file may exceed the limit. Serial numbers are
    /// capped at 255: running past the cap is an error, not a wraparound.
    pub(crate) fn reserve(&mut self, n: u32, diagnostics: &Diagnostics) -> Result<&mut File, Error> {
        if self.current_size.saturating_add(n) > self.config.max_size {
            self.rotate(n, diagnostics)?;
        } else {
            self.current_size += n;
        }
        Ok(&mut self.handle)
    }

    fn rotate(&mut self, n: u32, diagnostics: &Diagnostics) -> Result<(), Error> {
        let Some(next_serial) = self.config.serial_number.checked_add(1) else {
            let err = Error::SerialNumbersExhausted;
            diagnostics.report(Level::Error, &err.to_string());
            return Err(err);
        };
        self.config.serial_number = next_serial;
        let path = self.config.active_file_path();
        match create_log_file(&path, diagnostics) {
            Ok(handle) => {
                // Dropping the superseded handle closes it.
                self.handle = handle;
                self.current_size = n;
                Ok(())
            }
            Err(err) => {
                // A later emit retries the same serial.
                self.config.serial_number -= 1;
                Err(err)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn serial_number(&self) -> u8 {
        self.config.serial_number
    }

    #[cfg(test)]
    pub(crate) fn current_size(&self) -> u32 {
        self.current_size
    }
}

/// Seeds `(serial_number, resume_size)` from the directory contents.
fn scan_directory(config: &Config) -> Result<(u8, u32), Error> {
    let entries = fs::read_dir(&config.directory).map_err(|source| Error::ReadDirectory {
        path: config.directory.clone(),
        source,
    })?;
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.contains(&config.file_name_prefix))
        .collect();
    // Name order, not numeric order: serial 10 sorts before serial 2. The
    // count-based seeding below does not depend on it, only the resume probe
    // does.
    names.sort();

    let mut serial = names.len() + 1;
    let mut resume_size = 0u32;
    if let Some(last) = names.last() {
        let size = fs::metadata(config.directory.join(last))
            .map(|metadata| u32::try_from(metadata.len()).unwrap_or(u32::MAX))
            .unwrap_or(0);
        if size < config.max_size {
            serial -= 1;
            resume_size = size;
        }
    }
    let serial_number = u8::try_from(serial).map_err(|_| Error::SerialNumbersExhausted)?;
    Ok((serial_number, resume_size))
}

/// Creates a numbered log file, recording the outcome in the diagnostics
/// file.
fn create_log_file(path: &Path, diagnostics: &Diagnostics) -> Result<File, Error> {
    match File::create(path) {
        Ok(file) => {
            diagnostics.note_created(path);
            Ok(file)
        }
        Err(source) => {
            let err = Error::OpenFile {
                path: path.to_path_buf(),
                source,
            };
            diagnostics.report(Level::Error, &err.to_string());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;

    fn config_for(directory: &Path, max_size: u32) -> Config {
        Config {
            max_size,
            ..Config::default()
        }
        .verify(directory.to_path_buf())
    }

    fn write_file(path: &Path, len: usize) {
        let mut file = File::create(path).unwrap();
        file.write_all(&vec![b'x'; len]).unwrap();
    }

    #[test]
    fn empty_directory_starts_at_serial_one() {
        let dir = tempfile::tempdir().unwrap();
        let diagnostics = Diagnostics::open(dir.path()).unwrap();
        let state = FileState::initialize(config_for(dir.path(), 100), &diagnostics).unwrap();
        assert_eq!(state.serial_number(), 1);
        assert_eq!(state.current_size(), 0);
        assert!(dir.path().join("storage1.log").exists());
    }

    #[test]
    fn resumes_into_last_file_below_max() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("storage1.log"), 60);
        let diagnostics = Diagnostics::open(dir.path()).unwrap();
        let state = FileState::initialize(config_for(dir.path(), 100), &diagnostics).unwrap();
        assert_eq!(state.serial_number(), 1);
        assert_eq!(state.current_size(), 60);
    }

    #[test]
    fn file_at_max_starts_next_serial() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("storage1.log"), 100);
        let diagnostics = Diagnostics::open(dir.path()).unwrap();
        let state = FileState::initialize(config_for(dir.path(), 100), &diagnostics).unwrap();
        assert_eq!(state.serial_number(), 2);
        assert_eq!(state.current_size(), 0);
        assert!(dir.path().join("storage2.log").exists());
    }

    #[test]
    fn two_prior_files_resume_into_second() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("storage1.log"), 100);
        write_file(&dir.path().join("storage2.log"), 40);
        let diagnostics = Diagnostics::open(dir.path()).unwrap();
        let state = FileState::initialize(config_for(dir.path(), 100), &diagnostics).unwrap();
        assert_eq!(state.serial_number(), 2);
        assert_eq!(state.current_size(), 40);
    }

    #[test]
    fn non_matching_entries_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("unrelated.txt"), 500);
        let diagnostics = Diagnostics::open(dir.path()).unwrap();
        let state = FileState::initialize(config_for(dir.path(), 100), &diagnostics).unwrap();
        assert_eq!(state.serial_number(), 1);
        assert_eq!(state.current_size(), 0);
    }

    #[test]
    fn reserve_fills_up_to_exactly_max_without_rotating() {
        let dir = tempfile::tempdir().unwrap();
        let diagnostics = Diagnostics::open(dir.path()).unwrap();
        let mut state = FileState::initialize(config_for(dir.path(), 100), &diagnostics).unwrap();
        state.reserve(60, &diagnostics).unwrap();
        state.reserve(40, &diagnostics).unwrap();
        assert_eq!(state.serial_number(), 1);
        assert_eq!(state.current_size(), 100);
    }

    #[test]
    fn reserve_past_max_rotates_and_resets_size() {
        let dir = tempfile::tempdir().unwrap();
        let diagnostics = Diagnostics::open(dir.path()).unwrap();
        let mut state = FileState::initialize(config_for(dir.path(), 100), &diagnostics).unwrap();
        state.reserve(80, &diagnostics).unwrap();
        state.reserve(40, &diagnostics).unwrap();
        assert_eq!(state.serial_number(), 2);
        assert_eq!(state.current_size(), 40);
        assert!(dir.path().join("storage2.log").exists());
    }

    #[test]
    fn oversized_reservation_gets_a_fresh_file() {
        let dir = tempfile::tempdir().unwrap();
        let diagnostics = Diagnostics::open(dir.path()).unwrap();
        let mut state = FileState::initialize(config_for(dir.path(), 50), &diagnostics).unwrap();
        state.reserve(200, &diagnostics).unwrap();
        assert_eq!(state.serial_number(), 2);
        assert_eq!(state.current_size(), 200);
    }

    #[test]
    fn serial_cap_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let diagnostics = Diagnostics::open(dir.path()).unwrap();
        let mut config = config_for(dir.path(), 10);
        config.serial_number = u8::MAX;
        let path = config.active_file_path();
        let mut state = FileState {
            current_size: 10,
            handle: File::create(&path).unwrap(),
            config,
        };
        let err = state.reserve(5, &diagnostics).unwrap_err();
        assert!(matches!(err, Error::SerialNumbersExhausted));
        // The serial is untouched so the failure is diagnosable.
        assert_eq!(state.serial_number(), u8::MAX);
    }
}
