//! `MsgPackDecoder`: reads one value at a time from any byte source.
//!
//! The first byte of every value goes through [`Kind::of`]; the matching
//! `read_*` rule then consumes exactly the length and payload bytes its
//! format needs, recursing back into [`MsgPackDecoder::read_any`] for each
//! Array/Map child. Nothing past the end of a value is read, so several
//! values can be decoded back to back from one stream.
//!
//! Containers start empty and grow as children arrive; a declared length
//! reserves nothing up front.

use std::io::Read;

use tagpack_buffers::ReadBe;

use crate::constants::*;
use crate::{Array, CodecConfig, Float, Kind, Map, MsgPackError, Value};

pub struct MsgPackDecoder<R> {
    source: R,
    config: CodecConfig,
    depth: usize,
}

impl<R: Read> MsgPackDecoder<R> {
    pub fn new(source: R) -> Self {
        Self::with_config(source, CodecConfig::default())
    }

    pub fn with_config(source: R, config: CodecConfig) -> Self {
        Self {
            source,
            config,
            depth: 0,
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &R {
        &self.source
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    /// Reads the next complete value.
    pub fn read_any(&mut self) -> Result<Value, MsgPackError> {
        let byte = self.source.read_u8()?;
        let kind = Kind::of(byte).ok_or(MsgPackError::UnsupportedTag(byte))?;
        match kind {
            Kind::Nil => self.read_nil(byte),
            Kind::Boolean => self.read_boolean(byte),
            Kind::Integer => self.read_integer(byte),
            Kind::Float => self.read_float(byte),
            Kind::String => self.read_str(byte),
            Kind::Binary => self.read_bin(byte),
            Kind::Array => self.read_arr(byte),
            Kind::Map => self.read_map(byte),
        }
    }

    pub fn read_nil(&mut self, byte: u8) -> Result<Value, MsgPackError> {
        match byte {
            NIL => Ok(Value::Nil),
            _ => Err(unexpected(Kind::Nil, byte)),
        }
    }

    pub fn read_boolean(&mut self, byte: u8) -> Result<Value, MsgPackError> {
        match byte {
            FALSE => Ok(Value::Boolean(false)),
            TRUE => Ok(Value::Boolean(true)),
            _ => Err(unexpected(Kind::Boolean, byte)),
        }
    }

    pub fn read_integer(&mut self, byte: u8) -> Result<Value, MsgPackError> {
        let int = match byte {
            UINT8 => i64::from(self.source.read_u8()?),
            UINT16 => i64::from(self.source.read_u16()?),
            UINT32 => i64::from(self.source.read_u32()?),
            UINT64 => {
                let uint = self.source.read_u64()?;
                i64::try_from(uint).map_err(|_| MsgPackError::IntegerOverflow(uint))?
            }
            INT8 => i64::from(self.source.read_i8()?),
            INT16 => i64::from(self.source.read_i16()?),
            INT32 => i64::from(self.source.read_i32()?),
            INT64 => self.source.read_i64()?,
            _ if byte & FIXINT_MASK == 0 => i64::from(byte),
            _ if byte & NEGATIVE_FIXINT_MASK == NEGATIVE_FIXINT => i64::from(byte as i8),
            _ => return Err(unexpected(Kind::Integer, byte)),
        };
        Ok(Value::Integer(int))
    }

    pub fn read_float(&mut self, byte: u8) -> Result<Value, MsgPackError> {
        let float = match byte {
            FLOAT32 => Float::single(self.source.read_f32()?),
            FLOAT64 => Float::double(self.source.read_f64()?),
            _ => return Err(unexpected(Kind::Float, byte)),
        };
        Ok(Value::Float(float))
    }

    pub fn read_str(&mut self, byte: u8) -> Result<Value, MsgPackError> {
        let size = match byte {
            STR8 => self.read_len8()?,
            STR16 => self.read_len16()?,
            STR32 => self.read_len32()?,
            _ if byte & FIXSTR_MASK == FIXSTR => usize::from(byte & !FIXSTR_MASK),
            _ => return Err(unexpected(Kind::String, byte)),
        };
        let bytes = self.source.read_vec(size)?;
        self.config.encoding.decode(bytes).map(Value::String)
    }

    pub fn read_bin(&mut self, byte: u8) -> Result<Value, MsgPackError> {
        let size = match byte {
            BIN8 => self.read_len8()?,
            BIN16 => self.read_len16()?,
            BIN32 => self.read_len32()?,
            _ => return Err(unexpected(Kind::Binary, byte)),
        };
        Ok(Value::Binary(self.source.read_vec(size)?))
    }

    pub fn read_arr(&mut self, byte: u8) -> Result<Value, MsgPackError> {
        let size = match byte {
            ARRAY16 => self.read_len16()?,
            ARRAY32 => self.read_len32()?,
            _ if byte & FIXCONTAINER_MASK == FIXARRAY => usize::from(byte & !FIXCONTAINER_MASK),
            _ => return Err(unexpected(Kind::Array, byte)),
        };
        self.nested(|this| {
            let mut arr = Array::new();
            for _ in 0..size {
                arr.push(this.read_any()?);
            }
            Ok(Value::Array(arr))
        })
    }

    /// Pairs are inserted in stream order; a repeated key keeps its first
    /// position and takes the later value.
    pub fn read_map(&mut self, byte: u8) -> Result<Value, MsgPackError> {
        let size = match byte {
            MAP16 => self.read_len16()?,
            MAP32 => self.read_len32()?,
            _ if byte & FIXCONTAINER_MASK == FIXMAP => usize::from(byte & !FIXCONTAINER_MASK),
            _ => return Err(unexpected(Kind::Map, byte)),
        };
        self.nested(|this| {
            let mut map = Map::new();
            for _ in 0..size {
                let key = this.read_any()?;
                let val = this.read_any()?;
                map.insert(key, val);
            }
            Ok(Value::Map(map))
        })
    }

    fn nested(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<Value, MsgPackError>,
    ) -> Result<Value, MsgPackError> {
        if self.depth >= self.config.max_depth {
            return Err(MsgPackError::DepthLimitExceeded(self.config.max_depth));
        }
        self.depth += 1;
        let res = read(self);
        self.depth -= 1;
        res
    }

    fn read_len8(&mut self) -> Result<usize, MsgPackError> {
        Ok(usize::from(self.source.read_u8()?))
    }

    fn read_len16(&mut self) -> Result<usize, MsgPackError> {
        Ok(usize::from(self.source.read_u16()?))
    }

    fn read_len32(&mut self) -> Result<usize, MsgPackError> {
        Ok(self.source.read_u32()? as usize)
    }
}

fn unexpected(kind: Kind, byte: u8) -> MsgPackError {
    MsgPackError::UnexpectedTag {
        kind: kind.name(),
        byte,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringEncoding;

    fn dec(data: &[u8]) -> Result<Value, MsgPackError> {
        MsgPackDecoder::new(data).read_any()
    }

    #[test]
    fn scalars() {
        assert_eq!(dec(&[0xc0]).unwrap(), Value::Nil);
        assert_eq!(dec(&[0xc2]).unwrap(), Value::Boolean(false));
        assert_eq!(dec(&[0xc3]).unwrap(), Value::Boolean(true));
        assert_eq!(dec(&[0x7f]).unwrap(), Value::Integer(127));
        assert_eq!(dec(&[0xe0]).unwrap(), Value::Integer(-32));
        assert_eq!(dec(&[0xcc, 0x80]).unwrap(), Value::Integer(128));
        assert_eq!(dec(&[0xd0, 0xdf]).unwrap(), Value::Integer(-33));
    }

    #[test]
    fn non_canonical_widths_are_accepted() {
        assert_eq!(dec(&[0xcd, 0x00, 0x01]).unwrap(), Value::Integer(1));
        assert_eq!(dec(&[0xd9, 0x01, b'a']).unwrap(), Value::from("a"));
        assert_eq!(dec(&[0xdc, 0x00, 0x00]).unwrap(), Value::from(Array::new()));
    }

    #[test]
    fn float32_keeps_precision() {
        let v = dec(&[0xca, 0x3f, 0xc0, 0x00, 0x00]).unwrap();
        assert_eq!(v, Value::Float(Float::single(1.5)));
    }

    #[test]
    fn uint64_above_i64_max_overflows() {
        let err = dec(&[0xcf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]).unwrap_err();
        assert!(matches!(err, MsgPackError::IntegerOverflow(u64::MAX)));
    }

    #[test]
    fn unsupported_tags() {
        for byte in [0xc1, 0xc7, 0xc8, 0xc9, 0xd4, 0xd5, 0xd6, 0xd7, 0xd8] {
            match dec(&[byte, 0, 0, 0]) {
                Err(MsgPackError::UnsupportedTag(b)) => assert_eq!(b, byte),
                other => panic!("0x{byte:02x}: {other:?}"),
            }
        }
    }

    #[test]
    fn rules_reject_foreign_tags() {
        let mut decoder = MsgPackDecoder::new(&[0u8; 0][..]);
        let err = decoder.read_boolean(0xc0).unwrap_err();
        assert!(matches!(
            err,
            MsgPackError::UnexpectedTag {
                kind: "boolean",
                byte: 0xc0
            }
        ));
        assert!(decoder.read_arr(0x80).is_err());
        assert!(decoder.read_map(0x90).is_err());
        assert!(decoder.read_str(0xc4).is_err());
    }

    #[test]
    fn empty_source_is_truncated() {
        assert!(matches!(
            dec(&[]),
            Err(MsgPackError::StreamTruncated { wanted: 1, got: 0 })
        ));
    }

    #[test]
    fn short_payload_is_truncated() {
        assert!(matches!(
            dec(&[0xa5, b'a', b'b']),
            Err(MsgPackError::StreamTruncated { wanted: 5, got: 2 })
        ));
        assert!(matches!(
            dec(&[0xcd, 0x01]),
            Err(MsgPackError::StreamTruncated { wanted: 2, got: 1 })
        ));
    }

    #[test]
    fn forged_container_length_fails_cleanly() {
        let err = dec(&[0xdd, 0xff, 0xff, 0xff, 0xff, 0xc0]).unwrap_err();
        assert!(matches!(err, MsgPackError::StreamTruncated { .. }));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = dec(&[0xa2, 0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, MsgPackError::InvalidText("UTF-8")));
    }

    #[test]
    fn latin1_source() {
        let config = CodecConfig::default().with_encoding(StringEncoding::Latin1);
        let mut decoder = MsgPackDecoder::with_config(&[0xa2, 0xe9, 0xff][..], config);
        assert_eq!(decoder.read_any().unwrap(), Value::from("\u{e9}\u{ff}"));
    }

    #[test]
    fn duplicate_keys_keep_first_position() {
        let data = [0x83, 0xa1, b'a', 0x01, 0xa1, b'b', 0x02, 0xa1, b'a', 0x03];
        let v = dec(&data).unwrap();
        let map = v.as_map().unwrap();
        assert_eq!(map.len(), 2);
        let pairs: Vec<_> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        assert_eq!(
            pairs,
            vec![
                (Value::from("a"), Value::from(3)),
                (Value::from("b"), Value::from(2)),
            ]
        );
    }

    #[test]
    fn depth_limit() {
        let config = CodecConfig::default().with_max_depth(3);
        let ok = [0x91, 0x91, 0x91, 0xc0];
        assert!(MsgPackDecoder::with_config(&ok[..], config).read_any().is_ok());

        let deep = [0x91, 0x91, 0x91, 0x91, 0xc0];
        let err = MsgPackDecoder::with_config(&deep[..], config)
            .read_any()
            .unwrap_err();
        assert!(matches!(err, MsgPackError::DepthLimitExceeded(3)));
    }

    #[test]
    fn depth_resets_between_siblings() {
        let config = CodecConfig::default().with_max_depth(2);
        // [[nil], [nil], {nil: [nil]}]
        let data = [0x93, 0x91, 0xc0, 0x91, 0xc0, 0x81, 0xc0, 0x91, 0xc0];
        let err = MsgPackDecoder::with_config(&data[..], config)
            .read_any()
            .unwrap_err();
        assert!(matches!(err, MsgPackError::DepthLimitExceeded(2)));

        let data = [0x92, 0x91, 0xc0, 0x91, 0xc0];
        assert!(MsgPackDecoder::with_config(&data[..], config).read_any().is_ok());
    }

    #[test]
    fn values_back_to_back() {
        let data = [0x01, 0xa1, b'x', 0x90, 0xc3];
        let mut decoder = MsgPackDecoder::new(&data[..]);
        assert_eq!(decoder.read_any().unwrap(), Value::Integer(1));
        assert_eq!(decoder.read_any().unwrap(), Value::from("x"));
        assert_eq!(decoder.read_any().unwrap(), Value::from(Array::new()));
        assert_eq!(decoder.read_any().unwrap(), Value::Boolean(true));
        assert!(decoder.read_any().is_err());
        assert!(decoder.into_inner().is_empty());
    }
}
