//! First-byte dispatch: which [`Kind`] of value a tag byte starts.
//!
//! Each kind owns one predicate over the first byte. The predicates are
//! disjoint, so at most one kind claims any byte; bytes nobody claims
//! (`0xc1`, the ext family `0xc7..=0xc9` and `0xd4..=0xd8`) are rejected by
//! the decoder. A new wire variant means one new kind with one predicate
//! over unclaimed bytes, plus its decode arm.

use std::fmt;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Boolean,
    Integer,
    Float,
    String,
    Binary,
    Array,
    Map,
}

impl Kind {
    /// All kinds, in dispatch order.
    pub const ALL: [Kind; 8] = [
        Kind::Nil,
        Kind::Boolean,
        Kind::Integer,
        Kind::Float,
        Kind::String,
        Kind::Binary,
        Kind::Map,
        Kind::Array,
    ];

    /// Whether `byte` starts an encoding of this kind.
    pub fn accepts(self, byte: u8) -> bool {
        match self {
            Kind::Nil => byte == NIL,
            Kind::Boolean => byte == FALSE || byte == TRUE,
            Kind::Integer => {
                matches!(byte, UINT8..=INT64)
                    || byte & FIXINT_MASK == 0
                    || byte & NEGATIVE_FIXINT_MASK == NEGATIVE_FIXINT
            }
            Kind::Float => byte == FLOAT32 || byte == FLOAT64,
            Kind::String => matches!(byte, STR8..=STR32) || byte & FIXSTR_MASK == FIXSTR,
            Kind::Binary => matches!(byte, BIN8..=BIN32),
            Kind::Array => {
                byte == ARRAY16 || byte == ARRAY32 || byte & FIXCONTAINER_MASK == FIXARRAY
            }
            Kind::Map => byte == MAP16 || byte == MAP32 || byte & FIXCONTAINER_MASK == FIXMAP,
        }
    }

    /// The kind whose predicate accepts `byte`.
    pub fn of(byte: u8) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.accepts(byte))
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Binary => "binary",
            Kind::Array => "array",
            Kind::Map => "map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
