use intake_sniff::detect;
use intake_source::{ByteSource, SliceSource, consume_to_buffer};
use intake_verify::sha256_hex;

use crate::validate::validate;
use crate::{IngestConfig, IngestError, IngestResult, IngestSink, Result, UploadMeta};

/// Runs the ingest pipeline: drain, fingerprint, validate, replay to sink.
///
/// The default safety ceiling is `usize::MAX`, so an over-policy upload is
/// read in full and reported rather than cut off. Lowering the ceiling turns
/// a runaway stream into an [`IngestError::Consume`] before it is buffered.
#[derive(Clone, Copy, Debug)]
pub struct Ingestor {
    safety_ceiling: usize,
}

impl Default for Ingestor {
    fn default() -> Self { Self::new() }
}

impl Ingestor {
    pub fn new() -> Self {
        Self {
            safety_ceiling: usize::MAX,
        }
    }

    pub fn safety_ceiling(mut self, bytes: usize) -> Self {
        self.safety_ceiling = bytes;
        self
    }

    pub fn get_safety_ceiling(&self) -> usize { self.safety_ceiling }

    /// Ingest one upload.
    ///
    /// The sink is called exactly once whenever the source drains cleanly,
    /// whatever the verdict. If draining fails the sink is never called.
    pub fn run<S, K>(
        &self,
        meta: &UploadMeta,
        config: &IngestConfig,
        source: &mut S,
        sink: &mut K,
    ) -> Result<IngestResult>
    where
        S: ByteSource + ?Sized,
        K: IngestSink + ?Sized,
    {
        let _span = tracing::debug_span!("ingest", filename = ?meta.filename).entered();

        let buffer = consume_to_buffer(source, self.safety_ceiling)?;
        let size = i64::try_from(buffer.len()).map_err(|_| IngestError::SizeOutOfRange(buffer.len()))?;

        let detected = detect(&buffer);
        let sha256 = sha256_hex(&buffer);
        tracing::debug!(size, detected_mime = %detected, %sha256, "upload fingerprinted");

        let errors = validate(meta, size, detected.as_str(), config);
        let result = IngestResult::new(detected.as_str(), size, sha256, errors);

        tracing::info!(
            filename = ?meta.filename,
            size,
            detected_mime = %detected,
            ok = result.ok(),
            violations = ?result.messages(),
            "upload ingested"
        );
        if !result.ok() {
            tracing::warn!(violations = ?result.messages(), "upload failed validation");
        }

        let mut replay = SliceSource::new(&buffer);
        sink.persist(meta, &result, &mut replay)
            .map_err(|e| IngestError::Sink(Box::new(e)))?;

        Ok(result)
    }
}

/// [`Ingestor::run`] with the default ceiling.
pub fn ingest<S, K>(
    meta: &UploadMeta,
    config: &IngestConfig,
    source: &mut S,
    sink: &mut K,
) -> Result<IngestResult>
where
    S: ByteSource + ?Sized,
    K: IngestSink + ?Sized,
{
    Ingestor::new().run(meta, config, source, sink)
}
