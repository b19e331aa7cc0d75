//! Auto-growing binary buffer writer.

/// Appends bytes to an internal buffer.
///
/// `x0` marks the start of the chunk not yet flushed and `x` the write
/// position, so one writer can produce several independent chunks.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    /// Backing storage.
    pub uint8: Vec<u8>,
    /// Start of the pending (not yet flushed) chunk.
    pub x0: usize,
    /// Current write position.
    pub x: usize,
}

impl Writer {
    /// Creates a writer with a small default allocation.
    pub fn new() -> Self {
        Self::with_alloc_size(64)
    }

    /// Creates a writer with the given initial capacity.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(alloc_size),
            x0: 0,
            x: 0,
        }
    }

    /// Drops everything written so far.
    pub fn reset(&mut self) {
        self.uint8.clear();
        self.x0 = 0;
        self.x = 0;
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, bytes: &[u8]) {
        self.uint8.extend_from_slice(bytes);
        self.x += bytes.len();
    }

    /// Returns the pending chunk and starts a new one.
    pub fn flush(&mut self) -> Vec<u8> {
        let chunk = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        chunk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_chunks() {
        let mut writer = Writer::new();
        writer.buf(&[0x01, 0x02, 0x03]);
        assert_eq!(writer.flush(), vec![0x01, 0x02, 0x03]);
        writer.buf(&[0x04]);
        assert_eq!(writer.flush(), vec![0x04]);
        assert_eq!(writer.flush(), Vec::<u8>::new());
        assert_eq!(writer.x0, 4);
    }

    #[test]
    fn test_reset() {
        let mut writer = Writer::with_alloc_size(1);
        writer.buf(&[0xff; 10]);
        writer.reset();
        writer.buf(&[0x7f]);
        assert_eq!(writer.flush(), vec![0x7f]);
    }
}
