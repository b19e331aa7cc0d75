//! Unsigned LEB128.

use log::debug;
use num_bigint::{BigInt, BigUint, Sign};

use crate::cursor::{ByteCursor, ByteSink};
use crate::group::{self, GroupMode, CONTINUATION_BIT, GROUP_MASK};
use crate::Leb128Error;

/// Encodes a non-negative integer as ULEB128.
///
/// ```
/// use num_bigint::BigInt;
///
/// assert_eq!(bigleb::encode_unsigned(&BigInt::from(128)).unwrap(), vec![0x80, 0x01]);
/// assert!(bigleb::encode_unsigned(&BigInt::from(-1)).is_err());
/// ```
pub fn encode_unsigned(value: &BigInt) -> Result<Vec<u8>, Leb128Error> {
    let mut out = Vec::new();
    write_unsigned(value, &mut out)?;
    Ok(out)
}

/// Appends the ULEB128 encoding of `value` to `sink`.
///
/// Nothing is written when `value` is negative.
pub fn write_unsigned<S: ByteSink + ?Sized>(
    value: &BigInt,
    sink: &mut S,
) -> Result<(), Leb128Error> {
    if value.sign() == Sign::Minus {
        debug!("rejecting unsigned encode of negative value {value}");
        return Err(Leb128Error::InvalidInput(value.clone()));
    }
    write_biguint(value.magnitude(), sink);
    Ok(())
}

pub(crate) fn write_biguint<S: ByteSink + ?Sized>(value: &BigUint, sink: &mut S) {
    group::write_groups(value, GroupMode::Unsigned, sink);
}

/// Decodes one ULEB128 value, consuming bytes up to and including its
/// terminating byte.
pub fn decode_unsigned<C: ByteCursor + ?Sized>(cursor: &mut C) -> Result<BigInt, Leb128Error> {
    decode_biguint(cursor).map(BigInt::from)
}

pub(crate) fn decode_biguint<C: ByteCursor + ?Sized>(
    cursor: &mut C,
) -> Result<BigUint, Leb128Error> {
    let mut groups = Vec::new();
    loop {
        let byte = match cursor.read(1) {
            Ok(bytes) => bytes[0],
            Err(err) => {
                debug!("uleb128 truncated after {} bytes: {err}", groups.len());
                return Err(err.into());
            }
        };
        groups.push(byte & GROUP_MASK);
        if byte & CONTINUATION_BIT == 0 {
            return Ok(group::from_groups(&groups));
        }
    }
}
