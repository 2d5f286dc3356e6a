//! One-call encode and decode helpers.

use std::io::{Read, Write};

use tagpack_buffers::Reader;

use crate::{CodecConfig, MsgPackDecoder, MsgPackEncoder, MsgPackError, Value};

/// Encodes `value` into `sink` with the default configuration.
pub fn encode<W: Write>(value: &Value, sink: W) -> Result<usize, MsgPackError> {
    encode_with(value, sink, CodecConfig::default())
}

pub fn encode_with<W: Write>(
    value: &Value,
    sink: W,
    config: CodecConfig,
) -> Result<usize, MsgPackError> {
    MsgPackEncoder::with_config(sink, config).encode(value)
}

/// Encodes into a fresh byte vector.
pub fn encode_to_vec(value: &Value) -> Result<Vec<u8>, MsgPackError> {
    let mut out = Vec::new();
    encode(value, &mut out)?;
    Ok(out)
}

/// Decodes one value from `source` with the default configuration.
pub fn decode<R: Read>(source: R) -> Result<Value, MsgPackError> {
    decode_with(source, CodecConfig::default())
}

pub fn decode_with<R: Read>(source: R, config: CodecConfig) -> Result<Value, MsgPackError> {
    MsgPackDecoder::with_config(source, config).read_any()
}

/// Decodes exactly one value that must span the whole slice.
pub fn decode_slice(blob: &[u8]) -> Result<Value, MsgPackError> {
    let mut decoder = MsgPackDecoder::new(Reader::new(blob));
    let value = decoder.read_any()?;
    match decoder.get_ref().size() {
        0 => Ok(value),
        rest => Err(MsgPackError::TrailingBytes(rest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Map;

    #[test]
    fn encode_to_vec_matches_sink() {
        let mut map = Map::new();
        map.insert("compact", true);
        map.insert("schema", 0);
        let value = Value::from(map);

        let mut sink = Vec::new();
        let written = encode(&value, &mut sink).unwrap();
        assert_eq!(written, 18);
        assert_eq!(encode_to_vec(&value).unwrap(), sink);
        assert_eq!(decode(&sink[..]).unwrap(), value);
    }

    #[test]
    fn decode_slice_rejects_trailing() {
        assert_eq!(decode_slice(&[0xc3]).unwrap(), Value::Boolean(true));
        assert!(matches!(
            decode_slice(&[0xc3, 0xc0, 0xc0]),
            Err(MsgPackError::TrailingBytes(2))
        ));
    }

    #[test]
    fn decode_reads_from_a_cursor() {
        let mut cursor = std::io::Cursor::new(vec![0x92, 0x01, 0x02, 0xc0]);
        let v = decode(&mut cursor).unwrap();
        assert_eq!(v.as_array().map(|a| a.len()), Some(2));
        assert_eq!(cursor.position(), 3);
    }
}
