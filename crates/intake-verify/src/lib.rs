//! Content digest primitives for uploaded bytes.
//!
//! [`Sha256Hasher`] is a self-contained SHA-256 with the minimal [`Hasher`]
//! seam, so callers can swap in another algorithm. [`VerifiedSource`] hashes a
//! [`ByteSource`](intake_source::ByteSource) as it is drained, which lets a
//! downstream consumer check that the bytes it received are the bytes that
//! were fingerprinted.
//!
//! # Example
//!
//! ```
//! use intake_source::{SliceSource, consume_to_buffer};
//! use intake_verify::{VerifiedSource, Sha256Hasher, sha256_hex};
//!
//! let data = b"hello world";
//! let expected = sha256_hex(data);
//!
//! let mut verified = VerifiedSource::new(SliceSource::new(data), Sha256Hasher::new());
//! let copy = consume_to_buffer(&mut verified, 1024).unwrap();
//!
//! assert_eq!(copy, data);
//! verified.finish_hex(&expected).unwrap();
//! ```

pub use self::error::{Result, VerificationError};
pub use self::hasher::{Hasher, SHA256_LEN, Sha256Hasher, sha256_hex};
pub use self::source::VerifiedSource;

mod error;
mod hasher;
mod source;
