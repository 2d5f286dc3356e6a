//! `MsgPackEncoder`: canonical MessagePack encoder over any byte sink.
//!
//! Every writer picks the smallest tag family that fits its payload and
//! returns the number of bytes it wrote.

use std::io::Write;

use tagpack_buffers::WriteBe;

use crate::constants::*;
use crate::{Array, CodecConfig, Float, Map, MsgPackError, Precision, Value};

pub struct MsgPackEncoder<W> {
    sink: W,
    config: CodecConfig,
}

impl<W: Write> MsgPackEncoder<W> {
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, CodecConfig::default())
    }

    pub fn with_config(sink: W, config: CodecConfig) -> Self {
        Self { sink, config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Encodes one value depth-first and returns the bytes written.
    pub fn encode(&mut self, value: &Value) -> Result<usize, MsgPackError> {
        self.write_any(value)
    }

    pub fn write_any(&mut self, value: &Value) -> Result<usize, MsgPackError> {
        match value {
            Value::Nil => self.write_nil(),
            Value::Boolean(b) => self.write_boolean(*b),
            Value::Integer(i) => self.write_integer(*i),
            Value::Float(f) => self.write_float(*f),
            Value::String(s) => self.write_str(s),
            Value::Binary(b) => self.write_bin(b),
            Value::Array(arr) => self.write_arr(arr),
            Value::Map(map) => self.write_map(map),
        }
    }

    pub fn write_nil(&mut self) -> Result<usize, MsgPackError> {
        self.sink.write_u8(NIL)?;
        Ok(1)
    }

    pub fn write_boolean(&mut self, b: bool) -> Result<usize, MsgPackError> {
        self.sink.write_u8(if b { TRUE } else { FALSE })?;
        Ok(1)
    }

    pub fn write_integer(&mut self, int: i64) -> Result<usize, MsgPackError> {
        if (NEGATIVE_FIXINT_MIN..=POSITIVE_FIXINT_MAX).contains(&int) {
            // positive fixint 0x00..=0x7f, negative fixint 0xe0..=0xff
            self.sink.write_i8(int as i8)?;
            return Ok(1);
        }
        if int >= 0 {
            self.write_unsigned(int as u64)
        } else {
            self.write_negative(int)
        }
    }

    fn write_unsigned(&mut self, uint: u64) -> Result<usize, MsgPackError> {
        if let Ok(v) = u8::try_from(uint) {
            self.sink.write_u8u8(UINT8, v)?;
            Ok(2)
        } else if let Ok(v) = u16::try_from(uint) {
            self.sink.write_u8u16(UINT16, v)?;
            Ok(3)
        } else if let Ok(v) = u32::try_from(uint) {
            self.sink.write_u8u32(UINT32, v)?;
            Ok(5)
        } else {
            self.sink.write_u8u64(UINT64, uint)?;
            Ok(9)
        }
    }

    fn write_negative(&mut self, int: i64) -> Result<usize, MsgPackError> {
        if let Ok(v) = i8::try_from(int) {
            self.sink.write_u8(INT8)?;
            self.sink.write_i8(v)?;
            Ok(2)
        } else if let Ok(v) = i16::try_from(int) {
            self.sink.write_u8(INT16)?;
            self.sink.write_i16(v)?;
            Ok(3)
        } else if let Ok(v) = i32::try_from(int) {
            self.sink.write_u8(INT32)?;
            self.sink.write_i32(v)?;
            Ok(5)
        } else {
            self.sink.write_u8(INT64)?;
            self.sink.write_i64(int)?;
            Ok(9)
        }
    }

    pub fn write_float(&mut self, float: Float) -> Result<usize, MsgPackError> {
        match float.precision() {
            Precision::Single => {
                self.sink.write_u8f32(FLOAT32, float.value() as f32)?;
                Ok(5)
            }
            Precision::Double => {
                self.sink.write_u8f64(FLOAT64, float.value())?;
                Ok(9)
            }
        }
    }

    pub fn write_str_hdr(&mut self, length: usize) -> Result<usize, MsgPackError> {
        if length <= FIXSTR_MAX_LEN {
            self.sink.write_u8(FIXSTR | length as u8)?;
            Ok(1)
        } else {
            self.write_sized_hdr(length, Some(STR8), STR16, STR32)
        }
    }

    /// Encodes the text with the configured string encoding, then writes the
    /// header sized for the encoded byte length.
    pub fn write_str(&mut self, s: &str) -> Result<usize, MsgPackError> {
        let bytes = self.config.encoding.encode(s);
        let head = self.write_str_hdr(bytes.len())?;
        self.sink.write_all(&bytes)?;
        Ok(head + bytes.len())
    }

    pub fn write_bin_hdr(&mut self, length: usize) -> Result<usize, MsgPackError> {
        self.write_sized_hdr(length, Some(BIN8), BIN16, BIN32)
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> Result<usize, MsgPackError> {
        let head = self.write_bin_hdr(buf.len())?;
        self.sink.write_all(buf)?;
        Ok(head + buf.len())
    }

    pub fn write_arr_hdr(&mut self, length: usize) -> Result<usize, MsgPackError> {
        if length <= FIXCONTAINER_MAX_LEN {
            self.sink.write_u8(FIXARRAY | length as u8)?;
            Ok(1)
        } else {
            self.write_sized_hdr(length, None, ARRAY16, ARRAY32)
        }
    }

    pub fn write_arr(&mut self, arr: &Array) -> Result<usize, MsgPackError> {
        let mut written = self.write_arr_hdr(arr.len())?;
        for item in arr {
            written += self.write_any(item)?;
        }
        Ok(written)
    }

    pub fn write_map_hdr(&mut self, length: usize) -> Result<usize, MsgPackError> {
        if length <= FIXCONTAINER_MAX_LEN {
            self.sink.write_u8(FIXMAP | length as u8)?;
            Ok(1)
        } else {
            self.write_sized_hdr(length, None, MAP16, MAP32)
        }
    }

    /// Writes the header, then each pair key first, in insertion order.
    pub fn write_map(&mut self, map: &Map) -> Result<usize, MsgPackError> {
        let mut written = self.write_map_hdr(map.len())?;
        for (key, val) in map {
            written += self.write_any(key)?;
            written += self.write_any(val)?;
        }
        Ok(written)
    }

    /// Tag plus an 8/16/32-bit big-endian length field, smallest first.
    fn write_sized_hdr(
        &mut self,
        length: usize,
        tag8: Option<u8>,
        tag16: u8,
        tag32: u8,
    ) -> Result<usize, MsgPackError> {
        match tag8 {
            Some(tag) if length <= 0xff => {
                self.sink.write_u8u8(tag, length as u8)?;
                return Ok(2);
            }
            _ => {}
        }
        if let Ok(len) = u16::try_from(length) {
            self.sink.write_u8u16(tag16, len)?;
            Ok(3)
        } else if let Ok(len) = u32::try_from(length) {
            self.sink.write_u8u32(tag32, len)?;
            Ok(5)
        } else {
            Err(MsgPackError::LengthOverflow(length))
        }
    }
}
