//! MessagePack tag bytes and size limits.

/// One-byte markers that carry no length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MsgPackMarker {
    Nil = 0xc0,
    False = 0xc2,
    True = 0xc3,
}

pub const NIL: u8 = MsgPackMarker::Nil as u8;
pub const FALSE: u8 = MsgPackMarker::False as u8;
pub const TRUE: u8 = MsgPackMarker::True as u8;

pub const BIN8: u8 = 0xc4;
pub const BIN16: u8 = 0xc5;
pub const BIN32: u8 = 0xc6;

pub const FLOAT32: u8 = 0xca;
pub const FLOAT64: u8 = 0xcb;

pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;
pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

pub const ARRAY16: u8 = 0xdc;
pub const ARRAY32: u8 = 0xdd;
pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

/// `0x80 | len`, len 0..=15.
pub const FIXMAP: u8 = 0x80;
/// `0x90 | len`, len 0..=15.
pub const FIXARRAY: u8 = 0x90;
/// `0xa0 | len`, len 0..=31.
pub const FIXSTR: u8 = 0xa0;
/// First byte of the negative fixint range (-32).
pub const NEGATIVE_FIXINT: u8 = 0xe0;

pub const FIXINT_MASK: u8 = 0x80;
pub const NEGATIVE_FIXINT_MASK: u8 = 0xe0;
pub const FIXSTR_MASK: u8 = 0xe0;
pub const FIXCONTAINER_MASK: u8 = 0xf0;

pub const FIXSTR_MAX_LEN: usize = 0x1f;
pub const FIXCONTAINER_MAX_LEN: usize = 0x0f;
pub const POSITIVE_FIXINT_MAX: i64 = 0x7f;
pub const NEGATIVE_FIXINT_MIN: i64 = -0x20;
