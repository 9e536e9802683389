use serde::{Deserialize, Serialize};

/// What the uploader claims about the upload. None of it is trusted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadMeta {
    /// Opaque; not checked for path safety here.
    pub filename:       String,
    /// Empty means unspecified.
    pub claimed_mime:   String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<i64>,
}

impl UploadMeta {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn claimed_mime(mut self, mime: impl Into<String>) -> Self {
        self.claimed_mime = mime.into();
        self
    }

    pub fn content_length(mut self, length: i64) -> Self {
        self.content_length = Some(length);
        self
    }
}
