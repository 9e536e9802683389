use serde::{Serialize, Serializer};

/// A recoverable mismatch between what was claimed and what was measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Violation {
    #[error("contentLength is negative")]
    NegativeContentLength,

    #[error("contentLength mismatch")]
    ContentLengthMismatch,

    #[error("exceeds maxContentLength")]
    ExceedsMaxContentLength,

    #[error("claimedMime does not match detectedMime")]
    MimeMismatch,

    #[error("detectedMime not accepted")]
    MimeNotAccepted,
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Measured facts about an upload plus the policy verdict.
///
/// `ok` is derived from `errors` at construction and cannot drift from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResult {
    detected_mime: String,
    size:          i64,
    sha256:        String,
    ok:            bool,
    errors:        Vec<Violation>,
}

impl IngestResult {
    pub fn new(
        detected_mime: impl Into<String>,
        size: i64,
        sha256: impl Into<String>,
        errors: Vec<Violation>,
    ) -> Self {
        Self {
            detected_mime: detected_mime.into(),
            size,
            sha256: sha256.into(),
            ok: errors.is_empty(),
            errors,
        }
    }

    pub fn detected_mime(&self) -> &str { &self.detected_mime }

    /// Bytes actually received.
    pub fn size(&self) -> i64 { self.size }

    /// Lower-case hex SHA-256 of the received bytes.
    pub fn sha256(&self) -> &str { &self.sha256 }

    pub fn ok(&self) -> bool { self.ok }

    /// Violations in detection order.
    pub fn errors(&self) -> &[Violation] { &self.errors }

    pub fn has(&self, violation: Violation) -> bool { self.errors.contains(&violation) }

    pub fn messages(&self) -> Vec<String> { self.errors.iter().map(ToString::to_string).collect() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn ok_tracks_errors() {
        let clean = IngestResult::new("application/pdf", 10, EMPTY_SHA256, vec![]);
        assert!(clean.ok());

        let dirty = IngestResult::new("application/pdf", 10, EMPTY_SHA256, vec![Violation::MimeMismatch]);
        assert!(!dirty.ok());
        assert!(dirty.has(Violation::MimeMismatch));
        assert!(!dirty.has(Violation::MimeNotAccepted));
    }

    #[test]
    fn messages_are_stable() {
        let result = IngestResult::new(
            "image/png",
            1,
            EMPTY_SHA256,
            vec![
                Violation::NegativeContentLength,
                Violation::ContentLengthMismatch,
                Violation::ExceedsMaxContentLength,
                Violation::MimeMismatch,
                Violation::MimeNotAccepted,
            ],
        );
        assert_eq!(
            result.messages(),
            [
                "contentLength is negative",
                "contentLength mismatch",
                "exceeds maxContentLength",
                "claimedMime does not match detectedMime",
                "detectedMime not accepted",
            ]
        );
    }

    #[test]
    fn serializes_report() {
        let result = IngestResult::new("image/png", 3, EMPTY_SHA256, vec![Violation::MimeNotAccepted]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "detectedMime": "image/png",
                "size": 3,
                "sha256": EMPTY_SHA256,
                "ok": false,
                "errors": ["detectedMime not accepted"],
            })
        );
    }
}
