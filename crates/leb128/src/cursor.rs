//! Byte source and sink capabilities the codec is generic over.

use bigleb_buffers::{BufferError, Reader, Writer};

/// A sequential, position-tracking byte source.
pub trait ByteCursor {
    /// Consumes exactly `n` bytes, or fails without moving.
    fn read(&mut self, n: usize) -> Result<&[u8], BufferError>;

    /// Unread bytes, without consuming them.
    fn peek_remaining(&self) -> &[u8];

    fn remaining(&self) -> usize {
        self.peek_remaining().len()
    }
}

/// An append-only byte sink.
pub trait ByteSink {
    fn write(&mut self, bytes: &[u8]);
}

impl ByteCursor for Reader<'_> {
    fn read(&mut self, n: usize) -> Result<&[u8], BufferError> {
        self.buf(n)
    }

    fn peek_remaining(&self) -> &[u8] {
        Reader::remaining(self)
    }

    fn remaining(&self) -> usize {
        self.size()
    }
}

impl<'a> ByteCursor for &'a [u8] {
    fn read(&mut self, n: usize) -> Result<&[u8], BufferError> {
        let slice: &'a [u8] = *self;
        if n > slice.len() {
            return Err(BufferError::EndOfBuffer {
                requested: n,
                available: slice.len(),
            });
        }
        let (head, tail) = slice.split_at(n);
        *self = tail;
        Ok(head)
    }

    fn peek_remaining(&self) -> &[u8] {
        self
    }
}

impl ByteSink for Writer {
    fn write(&mut self, bytes: &[u8]) {
        self.buf(bytes);
    }
}

impl ByteSink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}
