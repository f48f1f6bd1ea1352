//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# rotlog

rotlog is a size-rotating file logging library for Rust.

# The problem

A long-running process that logs to a single file eventually fills the disk,
and a process that truncates its own log on restart loses the history you
wanted. rotlog takes the boring middle road: messages are appended to a
numbered file (`storage1.log`, `storage2.log`, ...) and once the active file
would exceed a configured byte limit, the writer opens the next serial and
keeps going. On restart it scans the directory and resumes into the last
half-full file instead of starting a new one.

# The API

```rust
let dir = tempfile::tempdir().unwrap();
let writer = rotlog::LogWriter::new(dir.path(), rotlog::Config::default()).unwrap();
writer.info("service started").unwrap();
writer.warn("queue depth above watermark").unwrap();
```

Every line has the same shape, a microsecond wall-clock timestamp followed by
a fixed-width level tag:

```text
2026-08-28 14:03:07.012345 [warn]  queue depth above watermark
```

[`Config`] controls the rotation threshold (default 100 MiB), the file name
prefix (default `storage`), and little else; zero or empty fields mean "use
the default".

# Guarantees

* A successful emit landed in exactly one numbered file; a failed emit wrote
  nothing to any rotated file and tells you so.
* Serial numbers increase by exactly one per rotation, and no file exceeds
  the limit before receiving its last message. The one exception is a single
  message longer than the limit, which is written whole to its own fresh
  file.
* Concurrent emits from multiple threads are serialized under one lock that
  covers both the rotation decision and the append, so lines are never torn
  and files never jointly overflowed.

# Limits

Rotation serials are 8-bit: a writer refuses to rotate past file 255 rather
than wrapping around or archiving. In-process concurrency only; two
*processes* pointed at the same directory are not coordinated. No compression
of rotated files, no shipping, no buffering.

# Diagnostics

The logger keeps a log of its own: a fixed-name `logs.log` file next to the
rotated files records file creations and rotation failures, best-effort,
outside the rotation scheme.
*/

mod config;
mod diagnostics;
mod error;
mod file_state;
mod format;
mod level;
mod writer;

pub use config::{Config, DEFAULT_FILE_NAME_PREFIX, DEFAULT_MAX_SIZE};
pub use error::Error;
pub use level::Level;
pub use writer::LogWriter;
