//! Codec error type.

use bigleb_buffers::BufferError;
use num_bigint::BigInt;
use thiserror::Error;

/// Error type for LEB128 encoding and decoding.
///
/// Every variant is terminal for the call that produced it: no partial value
/// is returned and callers should fail the containing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Leb128Error {
    #[error("cannot encode negative value as unsigned: {0}")]
    InvalidInput(BigInt),
    #[error("input ended before a terminating byte")]
    TruncatedInput,
    #[error("decoded value does not fit in {0}")]
    OutOfRange(&'static str),
}

impl From<BufferError> for Leb128Error {
    fn from(_: BufferError) -> Self {
        Leb128Error::TruncatedInput
    }
}
