//! Signed LEB128.
//!
//! Negative values are carried as `abs(value) - 1` with every group
//! inverted (`0x7f - group`), which is the two's-complement bit pattern
//! without ever materialising an infinite run of sign bits. The sign bit
//! (0x40) of the final group tells the two halves apart.

use log::{debug, trace};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;

use crate::cursor::{ByteCursor, ByteSink};
use crate::group::{self, GroupMode, Scan, GROUP_MASK};
use crate::unsigned;
use crate::Leb128Error;

/// Encodes any integer as SLEB128.
///
/// ```
/// use num_bigint::BigInt;
///
/// assert_eq!(bigleb::encode_signed(&BigInt::from(-1)), vec![0x7f]);
/// assert_eq!(bigleb::encode_signed(&BigInt::from(64)), vec![0xc0, 0x00]);
/// ```
pub fn encode_signed(value: &BigInt) -> Vec<u8> {
    let mut out = Vec::new();
    write_signed(value, &mut out);
    out
}

/// Appends the SLEB128 encoding of `value` to `sink`.
pub fn write_signed<S: ByteSink + ?Sized>(value: &BigInt, sink: &mut S) {
    match value.sign() {
        Sign::Minus => {
            let magnitude = value.magnitude() - BigUint::one();
            group::write_groups(&magnitude, GroupMode::Negative, sink);
        }
        Sign::NoSign | Sign::Plus => {
            group::write_groups(value.magnitude(), GroupMode::Positive, sink);
        }
    }
}

/// Decodes one SLEB128 value.
///
/// The terminating byte is located by lookahead first. Non-negative values
/// are handed to [`decode_unsigned`](crate::decode_unsigned); a truncated
/// input is reported before anything is consumed.
pub fn decode_signed<C: ByteCursor + ?Sized>(cursor: &mut C) -> Result<BigInt, Leb128Error> {
    let scanned = group::scan(cursor.peek_remaining());
    let len = match scanned {
        Scan::Truncated => {
            debug!(
                "sleb128 truncated: no terminating byte in {} remaining bytes",
                cursor.remaining()
            );
            return Err(Leb128Error::TruncatedInput);
        }
        Scan::Done {
            negative: false, ..
        } => {
            trace!("sleb128 sign bit clear, decoding as unsigned");
            return unsigned::decode_unsigned(cursor);
        }
        Scan::Done {
            len,
            negative: true,
        } => len,
    };

    let groups: Vec<u8> = cursor
        .read(len)?
        .iter()
        .map(|byte| GROUP_MASK - (byte & GROUP_MASK))
        .collect();
    let magnitude = group::from_groups(&groups);
    Ok(-BigInt::from(magnitude) - BigInt::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(value: i64) -> Vec<u8> {
        encode_signed(&BigInt::from(value))
    }

    fn dec(mut bytes: &[u8]) -> BigInt {
        decode_signed(&mut bytes).unwrap()
    }

    #[test]
    fn encode_boundaries() {
        assert_eq!(enc(0), vec![0x00]);
        assert_eq!(enc(-1), vec![0x7f]);
        assert_eq!(enc(63), vec![0x3f]);
        assert_eq!(enc(64), vec![0xc0, 0x00]);
        assert_eq!(enc(-64), vec![0x40]);
        assert_eq!(enc(-65), vec![0xbf, 0x7f]);
        assert_eq!(enc(127), vec![0xff, 0x00]);
        assert_eq!(enc(-128), vec![0x80, 0x7f]);
        assert_eq!(enc(-123_456), vec![0xc0, 0xbb, 0x78]);
    }

    #[test]
    fn decode_boundaries() {
        for value in [0i64, -1, 63, 64, -64, -65, 127, -128, -123_456, i64::MIN, i64::MAX] {
            assert_eq!(dec(&enc(value)), BigInt::from(value), "value {value}");
        }
    }

    #[test]
    fn decode_negative_consumes_only_its_bytes() {
        let data = [0xbf, 0x7f, 0x3f];
        let mut cursor: &[u8] = &data;
        assert_eq!(decode_signed(&mut cursor).unwrap(), BigInt::from(-65));
        assert_eq!(decode_signed(&mut cursor).unwrap(), BigInt::from(63));
        assert!(cursor.is_empty());
    }

    #[test]
    fn decode_truncated_leaves_cursor() {
        let data = [0xc0, 0x80];
        let mut cursor: &[u8] = &data;
        assert_eq!(decode_signed(&mut cursor), Err(Leb128Error::TruncatedInput));
        assert_eq!(cursor.len(), 2);
    }

    #[test]
    fn decode_sign_extended_padding() {
        // -1 padded with redundant 0x7f groups
        assert_eq!(dec(&[0xff, 0xff, 0x7f]), BigInt::from(-1));
        assert_eq!(dec(&[0xc0, 0x80, 0x00]), BigInt::from(64));
    }
}
