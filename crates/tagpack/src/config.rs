//! Codec configuration bound into encoders and decoders.

use std::borrow::Cow;

use crate::error::MsgPackError;

/// Nesting limit applied by [`CodecConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Text encoding used for string payloads.
///
/// One encoding applies to a whole encode or decode operation. UTF-8 is what
/// every MessagePack peer expects; Latin-1 exists for legacy streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StringEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1. Characters above U+00FF are written as `?`.
    Latin1,
}

impl StringEncoding {
    pub fn name(self) -> &'static str {
        match self {
            StringEncoding::Utf8 => "UTF-8",
            StringEncoding::Latin1 => "ISO-8859-1",
        }
    }

    /// Encodes `text` into payload bytes. Never fails.
    pub fn encode<'a>(self, text: &'a str) -> Cow<'a, [u8]> {
        match self {
            StringEncoding::Utf8 => Cow::Borrowed(text.as_bytes()),
            StringEncoding::Latin1 if text.is_ascii() => Cow::Borrowed(text.as_bytes()),
            StringEncoding::Latin1 => Cow::Owned(
                text.chars()
                    .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                    .collect(),
            ),
        }
    }

    /// Decodes payload bytes into text.
    pub fn decode(self, bytes: Vec<u8>) -> Result<String, MsgPackError> {
        match self {
            StringEncoding::Utf8 => {
                String::from_utf8(bytes).map_err(|_| MsgPackError::InvalidText(self.name()))
            }
            StringEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

/// Settings shared by [`crate::MsgPackEncoder`] and [`crate::MsgPackDecoder`].
///
/// # Example
///
/// ```
/// use tagpack::{CodecConfig, StringEncoding};
///
/// let config = CodecConfig::default()
///     .with_encoding(StringEncoding::Latin1)
///     .with_max_depth(32);
/// assert_eq!(config.max_depth, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    pub encoding: StringEncoding,
    /// Deepest Array/Map nesting a decoder accepts.
    pub max_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            encoding: StringEncoding::Utf8,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecConfig {
    pub fn with_encoding(mut self, encoding: StringEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_borrowed() {
        let text = "yay! \u{1f913}";
        let bytes = StringEncoding::Utf8.encode(text);
        assert!(matches!(bytes, Cow::Borrowed(_)));
        assert_eq!(bytes.len(), 9);
    }

    #[test]
    fn latin1_replaces_unmappable() {
        let bytes = StringEncoding::Latin1.encode("caf\u{e9} \u{20ac}");
        assert_eq!(bytes.as_ref(), &[b'c', b'a', b'f', 0xe9, b' ', b'?']);
    }

    #[test]
    fn latin1_decodes_every_byte() {
        let text = StringEncoding::Latin1.decode(vec![b'c', 0xe9, 0xff]).unwrap();
        assert_eq!(text, "c\u{e9}\u{ff}");
    }

    #[test]
    fn utf8_rejects_malformed() {
        let err = StringEncoding::Utf8.decode(vec![0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, MsgPackError::InvalidText("UTF-8")));
    }

    #[test]
    fn default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.encoding, StringEncoding::Utf8);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }
}
