//! MessagePack codec error type.

use tagpack_buffers::BufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MsgPackError {
    #[error("unsupported input, no reader for 0x{0:02x}")]
    UnsupportedTag(u8),
    #[error("unexpected end of stream, wanted to read {wanted} bytes but only got {got}")]
    StreamTruncated { wanted: usize, got: usize },
    #[error("unexpected first byte 0x{byte:02x} for {kind}")]
    UnexpectedTag { kind: &'static str, byte: u8 },
    #[error("string payload is not valid {0}")]
    InvalidText(&'static str),
    #[error("uint64 value {0} does not fit a signed 64-bit integer")]
    IntegerOverflow(u64),
    #[error("nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),
    #[error("length {0} does not fit a 32-bit length field")]
    LengthOverflow(usize),
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<BufferError> for MsgPackError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::Truncated { wanted, got } => MsgPackError::StreamTruncated { wanted, got },
            BufferError::Io(err) => MsgPackError::Io(err),
        }
    }
}
