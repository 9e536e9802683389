use std::fmt;

use memchr::memmem;

/// ZIP containers are only searched this far for OOXML markers.
pub const ZIP_SCAN_LIMIT: usize = 4096;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

const WORD_MARKERS: [&[u8]; 2] = [b"word/", b"[Content_Types].xml"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Png,
    WordDocument,
    OctetStream,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Pdf => "application/pdf",
            ContentType::Png => "image/png",
            ContentType::WordDocument => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ContentType::OctetStream => "application/octet-stream",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Classify `data` by its leading bytes. First match wins; anything
/// unrecognised is an octet stream.
pub fn detect(data: &[u8]) -> ContentType {
    match data {
        [b'%', b'P', b'D', b'F', ..] => ContentType::Pdf,
        _ if data.starts_with(&PNG_MAGIC) => ContentType::Png,
        [0x50, 0x4B, 0x03, 0x04, ..] if is_word_container(data) => ContentType::WordDocument,
        _ => ContentType::OctetStream,
    }
}

pub fn detect_mime(data: &[u8]) -> &'static str { detect(data).as_str() }

fn is_word_container(data: &[u8]) -> bool {
    let prefix = &data[..data.len().min(ZIP_SCAN_LIMIT)];
    WORD_MARKERS.iter().any(|marker| memmem::find(prefix, marker).is_some())
}
