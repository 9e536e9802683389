//! Policy checks over claimed vs. measured upload facts.

use intake_sniff::{is_accepted, mime_eq};

use crate::{IngestConfig, UploadMeta, Violation};

/// Run every rule and collect violations in rule order.
///
/// Rules are independent; one firing never suppresses another.
pub fn validate(meta: &UploadMeta, size: i64, detected_mime: &str, config: &IngestConfig) -> Vec<Violation> {
    [
        declared_length(meta, size),
        size_limit(size, config),
        claimed_mime(meta, detected_mime),
        accepted_mime(detected_mime, config),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn declared_length(meta: &UploadMeta, size: i64) -> Option<Violation> {
    match meta.content_length? {
        declared if declared < 0 => Some(Violation::NegativeContentLength),
        declared if declared != size => Some(Violation::ContentLengthMismatch),
        _ => None,
    }
}

fn size_limit(size: i64, config: &IngestConfig) -> Option<Violation> {
    let max = config.size_limit()?;
    (size > max).then_some(Violation::ExceedsMaxContentLength)
}

fn claimed_mime(meta: &UploadMeta, detected_mime: &str) -> Option<Violation> {
    let mismatch = !meta.claimed_mime.is_empty() && !mime_eq(&meta.claimed_mime, detected_mime);
    mismatch.then_some(Violation::MimeMismatch)
}

fn accepted_mime(detected_mime: &str, config: &IngestConfig) -> Option<Violation> {
    let rejected =
        !config.accepted_mimes.is_empty() && !is_accepted(detected_mime, &config.accepted_mimes);
    rejected.then_some(Violation::MimeNotAccepted)
}
