//! Stateful LEB128 decoder over a borrowed buffer.

use bigleb_buffers::Reader;
use log::debug;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::group::{self, Scan};
use crate::{signed, unsigned, Leb128Error};

/// Reads consecutive LEB128 values from one buffer.
///
/// ```
/// use bigleb::Leb128Decoder;
///
/// let mut decoder = Leb128Decoder::new(&[0xac, 0x02, 0x7e]);
/// assert_eq!(decoder.read_u64().unwrap(), 300);
/// assert_eq!(decoder.read_i64().unwrap(), -2);
/// assert_eq!(decoder.remaining(), 0);
/// ```
pub struct Leb128Decoder<'a> {
    pub reader: Reader<'a>,
}

impl<'a> Leb128Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
        }
    }

    /// Resets the decoder with a new byte slice to decode from.
    pub fn reset(&mut self, data: &'a [u8]) {
        self.reader.reset(data);
    }

    pub fn remaining(&self) -> usize {
        self.reader.size()
    }

    pub fn read_unsigned(&mut self) -> Result<BigInt, Leb128Error> {
        unsigned::decode_unsigned(&mut self.reader)
    }

    pub fn read_signed(&mut self) -> Result<BigInt, Leb128Error> {
        signed::decode_signed(&mut self.reader)
    }

    /// Reads an unsigned value that must fit in a `u64`.
    ///
    /// On `OutOfRange` the value's bytes have already been consumed.
    pub fn read_u64(&mut self) -> Result<u64, Leb128Error> {
        let value = unsigned::decode_biguint(&mut self.reader)?;
        value.to_u64().ok_or(Leb128Error::OutOfRange("u64"))
    }

    /// Reads a signed value that must fit in an `i64`.
    ///
    /// On `OutOfRange` the value's bytes have already been consumed.
    pub fn read_i64(&mut self) -> Result<i64, Leb128Error> {
        let value = self.read_signed()?;
        value.to_i64().ok_or(Leb128Error::OutOfRange("i64"))
    }

    /// Skips over the next value without decoding it, returning its length.
    pub fn skip(&mut self) -> Result<usize, Leb128Error> {
        match group::scan(self.reader.remaining()) {
            Scan::Done { len, .. } => {
                self.reader.skip(len)?;
                Ok(len)
            }
            Scan::Truncated => {
                debug!("cannot skip: {} bytes without terminator", self.reader.size());
                Err(Leb128Error::TruncatedInput)
            }
        }
    }
}
