//! Property-based tests for the encoding, digest and distance helpers.
//!
//! - Hex text decodes back to the bytes it was made from
//! - Bit strings are eight characters per byte, MSB first
//! - Hamming distance behaves like a metric on equal-length strings
//! - The own SHA-256 agrees with the `sha2` crate on arbitrary input

use proptest::prelude::*;

use cryptolab::avalanche::{HammingComparison, Mutation, build_variants, hamming_distance};
use cryptolab::encoding::{bytes_to_bits, bytes_to_hex, flip_bit, hex_to_bits, hex_to_bytes};
use cryptolab::hash::{DIGEST_BITS, DigestProvider, Sha2, Sha256};

fn bit_string(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::bool::ANY, len)
        .prop_map(|bits| bits.into_iter().map(|b| if b { '1' } else { '0' }).collect())
}

// ==================== Encoding ====================

proptest! {
    #[test]
    fn hex_decodes_to_source_bytes(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let text = bytes_to_hex(&bytes);
        prop_assert_eq!(text.len(), bytes.len() * 2);
        prop_assert_eq!(hex_to_bytes(&text).unwrap(), bytes);
    }

    #[test]
    fn bits_from_hex_match_bits_from_bytes(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let bits = bytes_to_bits(&bytes);
        prop_assert_eq!(bits.len(), bytes.len() * 8);
        prop_assert_eq!(hex_to_bits(&bytes_to_hex(&bytes)).unwrap(), bits);
    }

    #[test]
    fn flip_bit_changes_exactly_one_position(
        bytes in prop::collection::vec(any::<u8>(), 1..64),
        index in 0usize..512,
    ) {
        let index = index % (bytes.len() * 8);
        let flipped = flip_bit(&bytes, index);

        let distance = hamming_distance(&bytes_to_bits(&bytes), &bytes_to_bits(&flipped));
        prop_assert_eq!(distance, 1);
        prop_assert_eq!(flip_bit(&flipped, index), bytes);
    }
}

// ==================== Hamming distance ====================

proptest! {
    #[test]
    fn hamming_is_symmetric_and_bounded(a in bit_string(DIGEST_BITS), b in bit_string(DIGEST_BITS)) {
        let d = hamming_distance(&a, &b);
        prop_assert_eq!(d, hamming_distance(&b, &a));
        prop_assert!(d <= DIGEST_BITS);
        prop_assert_eq!(hamming_distance(&a, &a), 0);
    }

    #[test]
    fn hamming_triangle_inequality(
        a in bit_string(64),
        b in bit_string(64),
        c in bit_string(64),
    ) {
        prop_assert!(
            hamming_distance(&a, &c) <= hamming_distance(&a, &b) + hamming_distance(&b, &c)
        );
    }

    /// Checked in tenths of a percent; values like `31.3` have no exact `f64` form.
    #[test]
    fn percentage_is_nearest_tenth(distance in 0usize..=DIGEST_BITS) {
        let comparison = HammingComparison::from_distance(distance);
        let tenths = distance as f64 * 1000.0 / DIGEST_BITS as f64;

        prop_assert_eq!(comparison.distance as usize, distance);
        prop_assert!(((comparison.percentage * 10.0).round() - tenths).abs() <= 0.5);
    }
}

// ==================== Digests and variants ====================

proptest! {
    #[test]
    fn own_sha256_agrees_with_sha2(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(Sha256.digest(&bytes).unwrap(), Sha2.digest(&bytes).unwrap());
    }

    #[test]
    fn variants_keep_length_except_append(input in ".{1,40}") {
        let variants = build_variants(&input);
        prop_assert_eq!(variants.len(), 6);

        for variant in &variants {
            let expected = match variant.mutation {
                Mutation::AppendSpace => input.len() + 1,
                _ => input.len(),
            };
            prop_assert_eq!(variant.bytes.len(), expected);
        }
    }
}
