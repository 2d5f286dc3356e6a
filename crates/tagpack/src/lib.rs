//! Tagged value model with a canonical MessagePack binary codec.
//!
//! - [`Value`] holds one of eight variants: Nil, Boolean, Integer, Float,
//!   String, Binary, [`Array`] and [`Map`].
//! - [`MsgPackEncoder`] writes the smallest encoding for every node.
//! - [`MsgPackDecoder`] dispatches each value on its first byte via [`Kind`]
//!   and accepts any width of a family, canonical or not.
//! - [`to_json`] renders an indented JSON-like view for humans.
//!
//! ```
//! use tagpack::{decode_slice, encode_to_vec, Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("compact", true);
//! map.insert("schema", 0);
//! let value = Value::from(map);
//!
//! let blob = encode_to_vec(&value).unwrap();
//! assert_eq!(blob[0], 0x82);
//! assert_eq!(decode_slice(&blob).unwrap(), value);
//! assert_eq!(value.to_string(), "{\n  \"compact\": true,\n  \"schema\": 0\n}");
//! ```

pub mod constants;

mod array;
mod config;
mod decoder;
mod encoder;
mod error;
mod json_value;
mod kind;
mod map;
mod to_json;
mod util;
mod value;

pub use array::Array;
pub use config::{CodecConfig, StringEncoding, DEFAULT_MAX_DEPTH};
pub use decoder::MsgPackDecoder;
pub use encoder::MsgPackEncoder;
pub use error::MsgPackError;
pub use kind::Kind;
pub use map::Map;
pub use to_json::to_json;
pub use util::{decode, decode_slice, decode_with, encode, encode_to_vec, encode_with};
pub use value::{Float, Precision, Value};
