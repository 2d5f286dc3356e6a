//! Standard base64 encoding.

use crate::constants::{ALPHABET, PAD};

/// Two-character lookup table: entry `i` holds the characters for the
/// 12-bit group `i`.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 4096 {
        table[i][0] = ALPHABET[i >> 6];
        table[i][1] = ALPHABET[i & 0x3f];
        i += 1;
    }
    table
};

/// Length of the padded base64 text for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

#[inline]
fn push_pair(out: &mut String, group: usize) {
    let [a, b] = TABLE2[group];
    out.push(a as char);
    out.push(b as char);
}

/// Encodes a byte slice to a standard, padded base64 string.
///
/// # Example
///
/// ```
/// use tagpack_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(uint8.len()));

    let mut chunks = uint8.chunks_exact(3);
    for chunk in &mut chunks {
        let (o1, o2, o3) = (chunk[0] as usize, chunk[1] as usize, chunk[2] as usize);
        push_pair(&mut out, (o1 << 4) | (o2 >> 4));
        push_pair(&mut out, ((o2 & 0x0f) << 8) | o3);
    }

    match *chunks.remainder() {
        [o1] => {
            push_pair(&mut out, (o1 as usize) << 4);
            out.push(PAD);
            out.push(PAD);
        }
        [o1, o2] => {
            let (o1, o2) = (o1 as usize, o2 as usize);
            push_pair(&mut out, (o1 << 4) | (o2 >> 4));
            out.push(ALPHABET[(o2 & 0x0f) << 2] as char);
            out.push(PAD);
        }
        _ => {}
    }

    out
}
