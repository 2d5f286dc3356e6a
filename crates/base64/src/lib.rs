//! Base64 text encoding for binary payloads.
//!
//! Only the standard RFC 4648 alphabet with `=` padding is provided; it is
//! what the JSON projection of binary values needs.
//!
//! # Example
//!
//! ```
//! use tagpack_base64::to_base64;
//!
//! assert_eq!(to_base64(&[1, 3, 3, 7]), "AQMDBw==");
//! ```

mod constants;
mod to_base64;

pub use constants::{ALPHABET, PAD};
pub use to_base64::{encoded_len, to_base64};
