//! Validate and fingerprint untrusted uploads before persistence.
//!
//! [`ingest`] drains a one-pass [`ByteSource`] exactly once, measures it,
//! hashes it with SHA-256, sniffs its real content type, checks the
//! uploader's claims against an [`IngestConfig`], and hands the identical
//! bytes to an [`IngestSink`] through a fresh in-memory replay. Policy
//! violations are data in the [`IngestResult`]; only an unreadable stream (or
//! a failing sink) is an error.
//!
//! # Architecture
//!
//! - `data/` - Upload claims, policy and result report
//! - `validate.rs` - Ordered policy rules
//! - `ingest.rs` - Pipeline orchestration
//! - `sink.rs` - Persistence seam
//!
//! # Example
//!
//! ```
//! use intake::{IngestConfig, RecordingSink, SliceSource, UploadMeta, ingest};
//!
//! let body = b"%PDF-1.7\n...";
//! let meta = UploadMeta::new("report.pdf")
//!     .claimed_mime("application/pdf")
//!     .content_length(body.len() as i64);
//! let config = IngestConfig::new()
//!     .max_content_length(10 * 1024 * 1024)
//!     .accept("application/pdf");
//!
//! let mut sink = RecordingSink::new();
//! let result = ingest(&meta, &config, &mut SliceSource::new(body), &mut sink).unwrap();
//!
//! assert!(result.ok());
//! assert_eq!(result.detected_mime(), "application/pdf");
//! assert_eq!(sink.last().unwrap().bytes, body);
//! ```

pub use intake_sniff::ContentType;
pub use intake_source::{ByteSource, ReaderSource, SliceSource, SourceReader};

pub use self::data::config::IngestConfig;
pub use self::data::meta::UploadMeta;
pub use self::data::result::{IngestResult, Violation};
pub use self::error::{IngestError, Result};
pub use self::ingest::{Ingestor, ingest};
pub use self::sink::{IngestSink, Recorded, RecordingSink};
pub use self::validate::validate;

mod data;
mod error;
mod ingest;
mod sink;
mod validate;
