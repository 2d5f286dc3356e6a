//! Byte source over a borrowed slice, with cursor tracking.

use std::io;

/// A byte source that reads from a byte slice.
///
/// The reader keeps a cursor position; big-endian primitives come from the
/// blanket [`crate::ReadBe`] impl.
///
/// # Example
///
/// ```
/// use tagpack_buffers::{ReadBe, Reader};
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.read_u8().unwrap(), 0x01);
/// assert_eq!(reader.read_u16().unwrap(), 0x0203);
/// assert_eq!(reader.size(), 1);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }
}

impl io::Read for Reader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.size());
        buf[..n].copy_from_slice(&self.uint8[self.x..self.x + n]);
        self.x += n;
        Ok(n)
    }
}
