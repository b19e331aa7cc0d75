//! Stateful LEB128 encoder.

use bigleb_buffers::Writer;
use num_bigint::{BigInt, BigUint};

use crate::{signed, unsigned, Leb128Error};

/// Writes a sequence of LEB128 values into one [`Writer`].
///
/// ```
/// use bigleb::Leb128Encoder;
/// use num_bigint::BigInt;
///
/// let mut encoder = Leb128Encoder::new();
/// encoder.write_u64(300);
/// encoder.write_signed(&BigInt::from(-2));
/// assert_eq!(encoder.flush(), vec![0xac, 0x02, 0x7e]);
/// ```
pub struct Leb128Encoder {
    pub writer: Writer,
}

impl Default for Leb128Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Leb128Encoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a single unsigned value and returns its bytes.
    pub fn encode_unsigned(&mut self, value: &BigInt) -> Result<Vec<u8>, Leb128Error> {
        self.writer.reset();
        self.write_unsigned(value)?;
        Ok(self.writer.flush())
    }

    /// Encodes a single signed value and returns its bytes.
    pub fn encode_signed(&mut self, value: &BigInt) -> Vec<u8> {
        self.writer.reset();
        self.write_signed(value);
        self.writer.flush()
    }

    /// Appends the ULEB128 encoding of `value`; nothing is written on error.
    pub fn write_unsigned(&mut self, value: &BigInt) -> Result<(), Leb128Error> {
        unsigned::write_unsigned(value, &mut self.writer)
    }

    /// Appends the SLEB128 encoding of `value`.
    pub fn write_signed(&mut self, value: &BigInt) {
        signed::write_signed(value, &mut self.writer);
    }

    /// Appends a native unsigned value as ULEB128.
    pub fn write_u64(&mut self, value: u64) {
        unsigned::write_biguint(&BigUint::from(value), &mut self.writer);
    }

    /// Appends a native signed value as SLEB128.
    pub fn write_i64(&mut self, value: i64) {
        self.write_signed(&BigInt::from(value));
    }

    /// Returns everything written since the last flush.
    pub fn flush(&mut self) -> Vec<u8> {
        self.writer.flush()
    }
}
