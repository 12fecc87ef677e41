//! Text encodings shared by the signature and avalanche modules.
//!
//! - `hex`: lowercase, fixed-width (two characters per byte) hexadecimal
//!   text and its strict inverse.
//! - `bits`: big-endian binary strings (most significant bit first within
//!   each byte), used for bit-level comparison of digests.
//!
//! Neither module allocates more than the output string or buffer and
//! neither panics on caller input.

mod bits;
mod hex;

pub use self::bits::{bytes_to_bits, flip_bit, hex_to_bits};
pub use self::hex::{bytes_to_hex, hex_to_bytes};
