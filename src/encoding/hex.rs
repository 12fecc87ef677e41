use crate::error::{Error, Result};

/// Encodes bytes as lowercase hex, two characters per byte, no separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes hex text produced by [`bytes_to_hex`].
///
/// Upper-case digits are accepted. Odd-length input and characters outside
/// the hex alphabet are rejected; the error names the offending position.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    if text.len() % 2 != 0 {
        return Err(Error::OddHexLength { len: text.len() });
    }

    hex::decode(text).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => Error::InvalidHexCharacter {
            character: c,
            index,
        },
        _ => Error::OddHexLength { len: text.len() },
    })
}
