use std::io;

use intake_source::ByteSource;

use crate::{Hasher, Result, VerificationError};

/// Byte source that hashes data as it passes through.
pub struct VerifiedSource<S, H> {
    source: S,
    hasher: H,
    bytes:  u64,
}

impl<S, H> VerifiedSource<S, H> {
    pub fn new(source: S, hasher: H) -> Self {
        Self {
            source,
            hasher,
            bytes: 0,
        }
    }

    /// Bytes hashed so far.
    pub fn bytes_read(&self) -> u64 { self.bytes }
}

impl<S: ByteSource, H: Hasher> ByteSource for VerifiedSource<S, H> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.source.read(buf)?;
        if n > 0 {
            self.hasher.update(&buf[..n]);
            self.bytes += n as u64;
        }
        Ok(n)
    }
}

impl<S, H: Hasher> VerifiedSource<S, H> {
    /// Finalize against the expected raw digest.
    pub fn finish(self, expected: &[u8]) -> Result<()> {
        let actual = self.hasher.finalize();
        if actual == expected {
            Ok(())
        } else {
            Err(VerificationError::Mismatch {
                expected: expected.to_vec(),
                actual,
            })
        }
    }

    /// Finalize against a hex-encoded digest, case-insensitively.
    pub fn finish_hex(self, expected: &str) -> Result<()> {
        let expected = hex::decode(expected)?;
        self.finish(&expected)
    }
}
