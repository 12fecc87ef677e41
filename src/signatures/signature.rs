use std::fmt;

use crate::encoding::{bytes_to_hex, flip_bit, hex_to_bytes};
use crate::error::{Error, Result};

/// Length of a raw P-256 ECDSA signature (`r || s`), in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// A raw ECDSA P-256 signature: the 32-byte `r` followed by the 32-byte `s`.
///
/// Construction only checks the length. Whether `r` and `s` are in range,
/// and whether the signature is valid, is decided at verification time.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    pub fn from_array(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Parses raw bytes, rejecting anything that is not exactly 64 bytes
    /// with [`Error::MalformedSignature`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; SIGNATURE_LEN] =
            bytes.try_into().map_err(|_| Error::MalformedSignature {
                reason: format!("expected {SIGNATURE_LEN} bytes, got {}", bytes.len()),
            })?;

        Ok(Self(array))
    }

    /// Parses the lowercase (or mixed-case) hex text form.
    ///
    /// Leading and trailing whitespace is trimmed before decoding, so text
    /// pasted with a trailing newline still parses. Non-hex text and a
    /// decoded length other than 64 bytes are both reported as
    /// [`Error::MalformedSignature`].
    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = hex_to_bytes(text.trim()).map_err(|e| Error::MalformedSignature {
            reason: e.to_string(),
        })?;

        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// Lowercase hex, 128 characters.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Returns a copy with bit `index` inverted (bit 0 is the MSB of `r`).
    ///
    /// Indices at or past 512 return an identical copy.
    pub fn with_bit_flipped(&self, index: usize) -> Self {
        let mut out = self.0;
        out.copy_from_slice(&flip_bit(&self.0, index));
        Self(out)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}
