//! Arbitrary-precision LEB128.
//!
//! Unsigned (ULEB128) and signed (SLEB128) little-endian base-128 encoding
//! over [`num_bigint::BigInt`], so offsets and sizes of any magnitude survive
//! a round trip. Each byte carries a 7-bit group in its low bits and a
//! continuation flag in its high bit; groups are written least significant
//! first and every encoding is the shortest one possible.
//!
//! Decoding works over any [`ByteCursor`] and consumes exactly the bytes of
//! one value, so several values can be read back to back from a shared
//! buffer.
//!
//! # Example
//!
//! ```
//! use bigleb::{decode_signed, decode_unsigned, encode_signed, encode_unsigned};
//! use num_bigint::BigInt;
//!
//! let big = BigInt::from(1u8) << 100;
//! let mut bytes = encode_unsigned(&big).unwrap();
//! bytes.extend(encode_signed(&BigInt::from(-65)));
//!
//! let mut cursor = bytes.as_slice();
//! assert_eq!(decode_unsigned(&mut cursor).unwrap(), big);
//! assert_eq!(decode_signed(&mut cursor).unwrap(), BigInt::from(-65));
//! assert!(cursor.is_empty());
//! ```

mod cursor;
mod decoder;
mod encoder;
mod error;
mod group;
mod signed;
mod unsigned;

pub use cursor::{ByteCursor, ByteSink};
pub use decoder::Leb128Decoder;
pub use encoder::Leb128Encoder;
pub use error::Leb128Error;
pub use group::{CONTINUATION_BIT, GROUP_MASK, SIGN_BIT};
pub use signed::{decode_signed, encode_signed, write_signed};
pub use unsigned::{decode_unsigned, encode_unsigned, write_unsigned};

pub use bigleb_buffers::{BufferError, Reader, Writer};
