use std::io::{self, Read};

/// A forward-only, single-pass stream of bytes.
///
/// `read` copies up to `buf.len()` bytes to the front of `buf` and returns how
/// many were copied. `Ok(0)` means end-of-stream. Failures are reported as
/// `Err`, never as a short or zero read.
pub trait ByteSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> { (**self).read(buf) }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> { (**self).read(buf) }
}

/// In-memory source over a borrowed buffer.
///
/// The cursor only moves forward. Re-exposing the same bytes takes a new
/// `SliceSource`.
#[derive(Debug)]
pub struct SliceSource<'a> {
    data:   &'a [u8],
    offset: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self { Self { data, offset: 0 } }

    /// Bytes handed out so far.
    pub fn position(&self) -> usize { self.offset }

    /// Bytes left before end-of-stream.
    pub fn remaining(&self) -> usize { self.data.len() - self.offset }
}

impl ByteSource for SliceSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let rest = &self.data[self.offset..];
        let count = rest.len().min(buf.len());
        buf[..count].copy_from_slice(&rest[..count]);
        self.offset += count;
        Ok(count)
    }
}

/// Adapts a live `std::io::Read` stream (file, socket, request body).
///
/// Interrupted reads are retried; every other error is passed through.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R> ReaderSource<R> {
    pub fn new(reader: R) -> Self { Self { reader } }

    pub fn get_ref(&self) -> &R { &self.reader }

    pub fn into_inner(self) -> R { self.reader }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.reader.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}

/// `std::io::Read` view of a [`ByteSource`], for sinks that want `io::copy`.
#[derive(Debug)]
pub struct SourceReader<S> {
    source: S,
}

impl<S> SourceReader<S> {
    pub fn new(source: S) -> Self { Self { source } }

    pub fn into_inner(self) -> S { self.source }
}

impl<S: ByteSource> Read for SourceReader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> { self.source.read(buf) }
}
