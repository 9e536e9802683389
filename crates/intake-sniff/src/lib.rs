//! Signature-based content type sniffing.
//!
//! Uploads carry a claimed type that nobody should trust. [`detect`] looks at
//! the leading bytes instead; it is a best-effort sniff, not a format parser,
//! and never fails. The [`mime`] helpers compare type strings the way policy
//! checks need to: parameters, surrounding whitespace and case are ignored.

pub use self::detect::{ContentType, ZIP_SCAN_LIMIT, detect, detect_mime};
pub use self::mime::{essence, is_accepted, mime_eq};

mod detect;
pub mod mime;
