use crate::error::{Error, Result};

/// Expands bytes into a binary string, eight characters per byte, MSB first.
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:08b}")).collect()
}

/// Expands every hex character into its zero-padded 4-bit form.
///
/// Characters are processed in input order, so an even-length hex string
/// yields the same result as [`bytes_to_bits`] on the decoded bytes.
pub fn hex_to_bits(hex: &str) -> Result<String> {
    hex.chars()
        .enumerate()
        .map(|(index, character)| {
            character
                .to_digit(16)
                .map(|nibble| format!("{nibble:04b}"))
                .ok_or(Error::InvalidHexCharacter { character, index })
        })
        .collect()
}

/// Returns a copy of `bytes` with a single bit inverted.
///
/// Bits are numbered the way [`bytes_to_bits`] prints them: bit 0 is the most
/// significant bit of byte 0. An index past the end leaves the copy unchanged.
pub fn flip_bit(bytes: &[u8], index: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();

    if let Some(byte) = out.get_mut(index / 8) {
        *byte ^= 0x80 >> (index % 8);
    }

    out
}
