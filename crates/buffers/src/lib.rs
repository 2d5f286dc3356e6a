//! Byte helpers for tagpack.
//!
//! This crate provides the fixed-size big-endian primitives the codec is
//! built on, plus a cursor over an in-memory byte slice.
//!
//! # Overview
//!
//! - [`WriteBe`] - big-endian integer/float writers for any [`std::io::Write`]
//! - [`ReadBe`] - big-endian integer/float readers for any [`std::io::Read`]
//! - [`Reader`] - a cursor over a borrowed byte slice
//!
//! # Example
//!
//! ```
//! use tagpack_buffers::{ReadBe, Reader, WriteBe};
//!
//! let mut data = Vec::new();
//! data.write_u8(0x01).unwrap();
//! data.write_u16(0x0203).unwrap();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.read_u8().unwrap(), 0x01);
//! assert_eq!(reader.read_u16().unwrap(), 0x0203);
//! assert_eq!(reader.size(), 0);
//! ```

mod reader;
mod stream;

pub use reader::Reader;
pub use stream::{ReadBe, WriteBe};

/// Error type for buffer operations.
#[derive(Debug)]
pub enum BufferError {
    /// A byte source ended before `wanted` bytes could be read.
    Truncated { wanted: usize, got: usize },
    /// The underlying byte source or sink failed.
    Io(std::io::Error),
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::Truncated { wanted, got } => write!(
                f,
                "unexpected end of stream, wanted to read {wanted} bytes but only got {got}"
            ),
            BufferError::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BufferError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BufferError {
    fn from(err: std::io::Error) -> Self {
        BufferError::Io(err)
    }
}
