use serde::{Deserialize, Serialize};

/// Upload policy, shared read-only across ingest calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IngestConfig {
    /// Negative means unbounded.
    pub max_content_length: i64,
    /// Empty accepts any detected type.
    pub accepted_mimes:     Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self { Self::new() }
}

impl IngestConfig {
    pub const UNBOUNDED: i64 = -1;

    pub fn new() -> Self {
        Self {
            max_content_length: Self::UNBOUNDED,
            accepted_mimes:     Vec::new(),
        }
    }

    pub fn max_content_length(mut self, max: i64) -> Self {
        self.max_content_length = max;
        self
    }

    pub fn accept(mut self, mime: impl Into<String>) -> Self {
        self.accepted_mimes.push(mime.into());
        self
    }

    /// The size limit, if one is in force.
    pub fn size_limit(&self) -> Option<i64> {
        (self.max_content_length >= 0).then_some(self.max_content_length)
    }
}
