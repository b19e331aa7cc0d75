//! Byte cursors for the bigleb codecs.
//!
//! # Overview
//!
//! - [`Reader`] - reads from a borrowed byte slice, tracking a cursor position
//! - [`Writer`] - appends to an auto-growing buffer and hands out flushed chunks
//!
//! Reads never panic on short input: every consuming read returns
//! [`BufferError::EndOfBuffer`] and leaves the cursor untouched when fewer
//! bytes remain than were requested.
//!
//! # Example
//!
//! ```
//! use bigleb_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.buf(&[0x01, 0x02, 0x03]);
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.buf(2), Ok(&[0x01, 0x02][..]));
//! assert_eq!(reader.remaining(), &[0x03]);
//! assert!(reader.buf(2).is_err());
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: requested {requested} bytes, {available} available")]
    EndOfBuffer { requested: usize, available: usize },
}
