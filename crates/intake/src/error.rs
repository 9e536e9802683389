use std::error::Error as StdError;

/// Operational failures. Policy violations are never errors; they are
/// reported in [`IngestResult`](crate::IngestResult).
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to consume upload: {0}")]
    Consume(#[from] intake_source::Error),

    #[error("payload of {0} bytes exceeds supported size range")]
    SizeOutOfRange(usize),

    #[error("sink failed to persist upload: {0}")]
    Sink(#[source] Box<dyn StdError + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, IngestError>;
