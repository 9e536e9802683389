//! Forward-only byte sources for untrusted uploads.
//!
//! A [`ByteSource`] is read until it yields `0`, exactly once. Nothing here
//! rewinds: to show the same bytes to a second consumer, drain the source with
//! [`consume_to_buffer`] and build a fresh [`SliceSource`] over the buffer.
//!
//! # Example
//!
//! ```
//! use intake_source::{consume_to_buffer, SliceSource};
//!
//! let mut source = SliceSource::new(b"%PDF-1.7");
//! let buffer = consume_to_buffer(&mut source, 1024).unwrap();
//!
//! let replay = SliceSource::new(&buffer);
//! assert_eq!(replay.remaining(), 8);
//! ```

pub use self::consume::{SCRATCH_SIZE, consume_to_buffer};
pub use self::error::{Error, Result};
pub use self::source::{ByteSource, ReaderSource, SliceSource, SourceReader};

mod consume;
mod error;
mod source;
