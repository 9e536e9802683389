use std::io;

use crate::{ByteSource, Error, Result};

/// Chunk size used when draining a source.
pub const SCRATCH_SIZE: usize = 64 * 1024;

/// Drain `source` into a new buffer, failing once more than `max_bytes` arrive.
///
/// The ceiling is checked after every read, so an endless stream is cut off
/// after at most `max_bytes + SCRATCH_SIZE` bytes have been pulled from it.
pub fn consume_to_buffer<S: ByteSource + ?Sized>(source: &mut S, max_bytes: usize) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(max_bytes.min(SCRATCH_SIZE));
    let mut scratch = [0u8; SCRATCH_SIZE];
    let mut total: usize = 0;

    loop {
        let count = source.read(&mut scratch)?;
        if count == 0 {
            break;
        }
        let chunk = scratch.get(..count).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "byte source reported more bytes than requested")
        })?;

        total = total.saturating_add(count);
        if total > max_bytes {
            tracing::warn!(ceiling = max_bytes, read = total, "byte source exceeds buffer ceiling");
            return Err(Error::CeilingExceeded {
                ceiling: max_bytes,
                read:    total,
            });
        }
        data.extend_from_slice(chunk);
    }

    tracing::debug!(bytes = data.len(), "byte source drained");
    Ok(data)
}
