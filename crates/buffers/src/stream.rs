//! Big-endian read/write primitives over `std::io` byte sinks and sources.

use std::io::{self, Read, Write};

use crate::BufferError;

/// Most `read_vec` reserves ahead of the bytes that have actually arrived.
const READ_CHUNK: usize = 4096;

/// Big-endian writers for any [`Write`] sink.
///
/// Every method writes the whole value or fails with the sink's own error.
pub trait WriteBe: Write {
    /// Writes an unsigned 8-bit integer.
    #[inline]
    fn write_u8(&mut self, val: u8) -> io::Result<()> {
        self.write_all(&[val])
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    fn write_i8(&mut self, val: i8) -> io::Result<()> {
        self.write_all(&[val as u8])
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    fn write_u16(&mut self, val: u16) -> io::Result<()> {
        self.write_all(&val.to_be_bytes())
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    fn write_i16(&mut self, val: i16) -> io::Result<()> {
        self.write_all(&val.to_be_bytes())
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    fn write_u32(&mut self, val: u32) -> io::Result<()> {
        self.write_all(&val.to_be_bytes())
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    fn write_i32(&mut self, val: i32) -> io::Result<()> {
        self.write_all(&val.to_be_bytes())
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    #[inline]
    fn write_u64(&mut self, val: u64) -> io::Result<()> {
        self.write_all(&val.to_be_bytes())
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    fn write_i64(&mut self, val: i64) -> io::Result<()> {
        self.write_all(&val.to_be_bytes())
    }

    /// Writes a 32-bit floating point number (big-endian).
    #[inline]
    fn write_f32(&mut self, val: f32) -> io::Result<()> {
        self.write_all(&val.to_be_bytes())
    }

    /// Writes a 64-bit floating point number (big-endian).
    #[inline]
    fn write_f64(&mut self, val: f64) -> io::Result<()> {
        self.write_all(&val.to_be_bytes())
    }

    /// Writes a u8 followed by another u8.
    fn write_u8u8(&mut self, u8_val: u8, val: u8) -> io::Result<()> {
        self.write_all(&[u8_val, val])
    }

    /// Writes a u8 followed by a u16 (big-endian).
    fn write_u8u16(&mut self, u8_val: u8, u16_val: u16) -> io::Result<()> {
        let bytes = u16_val.to_be_bytes();
        self.write_all(&[u8_val, bytes[0], bytes[1]])
    }

    /// Writes a u8 followed by a u32 (big-endian).
    fn write_u8u32(&mut self, u8_val: u8, u32_val: u32) -> io::Result<()> {
        let mut out = [u8_val; 5];
        out[1..].copy_from_slice(&u32_val.to_be_bytes());
        self.write_all(&out)
    }

    /// Writes a u8 followed by a u64 (big-endian).
    fn write_u8u64(&mut self, u8_val: u8, u64_val: u64) -> io::Result<()> {
        let mut out = [u8_val; 9];
        out[1..].copy_from_slice(&u64_val.to_be_bytes());
        self.write_all(&out)
    }

    /// Writes a u8 followed by a f32 (big-endian).
    fn write_u8f32(&mut self, u8_val: u8, f32_val: f32) -> io::Result<()> {
        let mut out = [u8_val; 5];
        out[1..].copy_from_slice(&f32_val.to_be_bytes());
        self.write_all(&out)
    }

    /// Writes a u8 followed by a f64 (big-endian).
    fn write_u8f64(&mut self, u8_val: u8, f64_val: f64) -> io::Result<()> {
        let mut out = [u8_val; 9];
        out[1..].copy_from_slice(&f64_val.to_be_bytes());
        self.write_all(&out)
    }
}

impl<W: Write + ?Sized> WriteBe for W {}

/// Big-endian readers for any [`Read`] source.
///
/// A source that ends early yields [`BufferError::Truncated`] with the number
/// of bytes that were wanted and the number that actually arrived.
pub trait ReadBe: Read {
    /// Fills `buf` completely from the source.
    fn read_exact_be(&mut self, buf: &mut [u8]) -> Result<(), BufferError> {
        let wanted = buf.len();
        let mut off = 0;
        while off < wanted {
            match self.read(&mut buf[off..]) {
                Ok(0) => return Err(BufferError::Truncated { wanted, got: off }),
                Ok(n) => off += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(BufferError::Io(e)),
            }
        }
        Ok(())
    }

    /// Reads exactly `len` bytes into a new vector.
    ///
    /// Memory is reserved one `READ_CHUNK` at a time as bytes arrive, so a
    /// bogus length field cannot force a large allocation on its own.
    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, BufferError> {
        let mut out = Vec::with_capacity(len.min(READ_CHUNK));
        let mut chunk = [0u8; READ_CHUNK];
        while out.len() < len {
            let want = (len - out.len()).min(chunk.len());
            match self.read(&mut chunk[..want]) {
                Ok(0) => {
                    return Err(BufferError::Truncated {
                        wanted: len,
                        got: out.len(),
                    })
                }
                Ok(n) => out.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(BufferError::Io(e)),
            }
        }
        Ok(out)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    fn read_u8(&mut self) -> Result<u8, BufferError> {
        let mut b = [0u8; 1];
        self.read_exact_be(&mut b)?;
        Ok(b[0])
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    fn read_i8(&mut self) -> Result<i8, BufferError> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads an unsigned 16-bit integer (big-endian).
    #[inline]
    fn read_u16(&mut self) -> Result<u16, BufferError> {
        let mut b = [0u8; 2];
        self.read_exact_be(&mut b)?;
        Ok(u16::from_be_bytes(b))
    }

    /// Reads a signed 16-bit integer (big-endian).
    #[inline]
    fn read_i16(&mut self) -> Result<i16, BufferError> {
        let mut b = [0u8; 2];
        self.read_exact_be(&mut b)?;
        Ok(i16::from_be_bytes(b))
    }

    /// Reads an unsigned 32-bit integer (big-endian).
    #[inline]
    fn read_u32(&mut self) -> Result<u32, BufferError> {
        let mut b = [0u8; 4];
        self.read_exact_be(&mut b)?;
        Ok(u32::from_be_bytes(b))
    }

    /// Reads a signed 32-bit integer (big-endian).
    #[inline]
    fn read_i32(&mut self) -> Result<i32, BufferError> {
        let mut b = [0u8; 4];
        self.read_exact_be(&mut b)?;
        Ok(i32::from_be_bytes(b))
    }

    /// Reads an unsigned 64-bit integer (big-endian).
    #[inline]
    fn read_u64(&mut self) -> Result<u64, BufferError> {
        let mut b = [0u8; 8];
        self.read_exact_be(&mut b)?;
        Ok(u64::from_be_bytes(b))
    }

    /// Reads a signed 64-bit integer (big-endian).
    #[inline]
    fn read_i64(&mut self) -> Result<i64, BufferError> {
        let mut b = [0u8; 8];
        self.read_exact_be(&mut b)?;
        Ok(i64::from_be_bytes(b))
    }

    /// Reads a 32-bit floating point number (big-endian).
    #[inline]
    fn read_f32(&mut self) -> Result<f32, BufferError> {
        let mut b = [0u8; 4];
        self.read_exact_be(&mut b)?;
        Ok(f32::from_be_bytes(b))
    }

    /// Reads a 64-bit floating point number (big-endian).
    #[inline]
    fn read_f64(&mut self) -> Result<f64, BufferError> {
        let mut b = [0u8; 8];
        self.read_exact_be(&mut b)?;
        Ok(f64::from_be_bytes(b))
    }
}

impl<R: Read + ?Sized> ReadBe for R {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that hands out one byte per call and interrupts every other call.
    struct Trickle<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
            }
            if self.data.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[0];
            self.data = &self.data[1..];
            Ok(1)
        }
    }

    #[test]
    fn test_write_combos() {
        let mut out = Vec::new();
        out.write_u8u8(0xcc, 0x80).unwrap();
        out.write_u8u16(0xcd, 0x0100).unwrap();
        out.write_u8u32(0xce, 0x0001_0000).unwrap();
        assert_eq!(
            out,
            [0xcc, 0x80, 0xcd, 0x01, 0x00, 0xce, 0x00, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn test_write_u8f32() {
        let mut out = Vec::new();
        out.write_u8f32(0xca, 1.5).unwrap();
        assert_eq!(out, [0xca, 0x3f, 0xc0, 0x00, 0x00]);
    }

    #[test]
    fn test_signed_roundtrip() {
        let mut out = Vec::new();
        out.write_i8(-1).unwrap();
        out.write_i16(-1000).unwrap();
        out.write_i32(i32::MIN).unwrap();
        out.write_i64(-9_999_999_999).unwrap();
        let mut src = out.as_slice();
        assert_eq!(src.read_i8().unwrap(), -1);
        assert_eq!(src.read_i16().unwrap(), -1000);
        assert_eq!(src.read_i32().unwrap(), i32::MIN);
        assert_eq!(src.read_i64().unwrap(), -9_999_999_999);
    }

    #[test]
    fn test_truncated_reports_counts() {
        let mut src: &[u8] = &[0x01, 0x02, 0x03];
        match src.read_u64() {
            Err(BufferError::Truncated { wanted, got }) => {
                assert_eq!(wanted, 8);
                assert_eq!(got, 3);
            }
            other => panic!("expected truncation, got {other:?}"),
        }
    }

    #[test]
    fn test_interrupted_is_retried() {
        let mut src = Trickle {
            data: &[0x12, 0x34, 0x56, 0x78],
            interrupt: false,
        };
        assert_eq!(src.read_u32().unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_read_vec_forged_length() {
        let mut src: &[u8] = b"abc";
        match src.read_vec(u32::MAX as usize) {
            Err(BufferError::Truncated { got, .. }) => assert_eq!(got, 3),
            other => panic!("expected truncation, got {other:?}"),
        }
    }

    #[test]
    fn test_read_vec_reserve_tracks_delivery() {
        let mut src: &[u8] = b"ab";
        let out = src.read_vec(2).unwrap();
        assert_eq!(out, b"ab");
        assert!(out.capacity() < READ_CHUNK);
    }

    #[test]
    fn test_read_vec_exact() {
        let data: Vec<u8> = (0..10_000u32).map(|i| i as u8).collect();
        let mut src = data.as_slice();
        assert_eq!(src.read_vec(10_000).unwrap(), data);
        assert!(src.is_empty());
    }
}
