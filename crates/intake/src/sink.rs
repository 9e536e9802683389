//! The downstream persistence seam.

use std::io::Read;

use intake_source::{ByteSource, SourceReader};
use intake_verify::{Sha256Hasher, VerificationError, VerifiedSource};

use crate::{IngestResult, UploadMeta};

/// Receives every upload, valid or not, exactly once.
///
/// `data` replays the full content from the first byte and is forward-only;
/// the sink is expected to drain it. What the sink does on failure is its own
/// business: the error is handed back to the `ingest` caller and never folded
/// into the result.
pub trait IngestSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn persist(
        &mut self,
        meta: &UploadMeta,
        result: &IngestResult,
        data: &mut dyn ByteSource,
    ) -> Result<(), Self::Error>;
}

impl<K: IngestSink + ?Sized> IngestSink for &mut K {
    type Error = K::Error;

    fn persist(
        &mut self,
        meta: &UploadMeta,
        result: &IngestResult,
        data: &mut dyn ByteSource,
    ) -> Result<(), Self::Error> {
        (**self).persist(meta, result, data)
    }
}

/// One persisted upload as seen by [`RecordingSink`].
#[derive(Clone, Debug)]
pub struct Recorded {
    pub meta:   UploadMeta,
    pub result: IngestResult,
    pub bytes:  Vec<u8>,
}

/// Keeps uploads in memory, re-hashing the replay on the way in.
///
/// A replay whose digest differs from `result.sha256()` is still recorded,
/// then reported as [`VerificationError::Mismatch`].
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls:    usize,
    recorded: Vec<Recorded>,
}

impl RecordingSink {
    pub fn new() -> Self { Self::default() }

    /// Number of `persist` invocations, including failed ones.
    pub fn calls(&self) -> usize { self.calls }

    pub fn recorded(&self) -> &[Recorded] { &self.recorded }

    pub fn last(&self) -> Option<&Recorded> { self.recorded.last() }
}

impl IngestSink for RecordingSink {
    type Error = VerificationError;

    fn persist(
        &mut self,
        meta: &UploadMeta,
        result: &IngestResult,
        data: &mut dyn ByteSource,
    ) -> Result<(), Self::Error> {
        self.calls += 1;

        let mut verified = VerifiedSource::new(data, Sha256Hasher::new());
        let mut bytes = Vec::new();
        SourceReader::new(&mut verified).read_to_end(&mut bytes)?;

        tracing::trace!(filename = ?meta.filename, bytes = bytes.len(), "recorded upload");
        self.recorded.push(Recorded {
            meta: meta.clone(),
            result: result.clone(),
            bytes,
        });

        verified.finish_hex(result.sha256())
    }
}
