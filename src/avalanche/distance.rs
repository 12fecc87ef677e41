use std::fmt;

use serde::Serialize;

use crate::hash::DIGEST_BITS;

/// Counts positions at which two bit strings differ.
///
/// Only the common prefix is compared: characters past the end of the
/// shorter string are ignored. Digests in this crate are always 256 bits,
/// so the truncation never triggers in normal operation.
pub fn hamming_distance(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count()
}

/// Hamming distance between two digests, with its share of the 256 bits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HammingComparison {
    /// Differing bit positions, `0..=256`.
    pub distance: u32,
    /// `distance / 256 * 100`, rounded to one decimal place.
    pub percentage: f64,
}

impl HammingComparison {
    /// Compares two digest bit strings.
    pub fn between(a_bits: &str, b_bits: &str) -> Self {
        Self::from_distance(hamming_distance(a_bits, b_bits))
    }

    pub fn from_distance(distance: usize) -> Self {
        let distance = distance.min(DIGEST_BITS);
        let percentage = (distance as f64 / DIGEST_BITS as f64 * 1000.0).round() / 10.0;

        Self {
            distance: distance as u32,
            percentage,
        }
    }
}

impl fmt::Display for HammingComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits ({:.1}%)", self.distance, self.percentage)
    }
}
