//! Binary buffer reader with cursor tracking.

use crate::BufferError;

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position `x` and an exclusive `end`.
/// Consuming reads either advance the cursor by exactly the requested
/// amount or fail with [`BufferError::EndOfBuffer`] without moving it.
///
/// # Example
///
/// ```
/// use bigleb_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.buf(1), Ok(&[0x01][..]));
/// assert_eq!(reader.remaining(), &[0x02, 0x03, 0x04]);
/// assert_eq!(reader.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.x = 0;
        self.end = uint8.len();
        self.uint8 = uint8;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Returns every unread byte without advancing the cursor.
    pub fn remaining(&self) -> &'a [u8] {
        &self.uint8[self.x..self.end]
    }

    fn check(&self, size: usize) -> Result<(), BufferError> {
        let available = self.size();
        if size > available {
            return Err(BufferError::EndOfBuffer {
                requested: size,
                available,
            });
        }
        Ok(())
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.check(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let x = self.x;
        self.x += size;
        Ok(&self.uint8[x..self.x])
    }
}
