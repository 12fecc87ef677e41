//! Avalanche-effect analysis.
//!
//! A base input is mutated in five small, deterministic ways. Each variant
//! is digested and its digest compared bit-for-bit against the digest of
//! the unmodified input. For a good 256-bit hash every comparison should land
//! near 128 differing bits, however small the input change.
//!
//! - `variants`: the fixed, ordered set of mutations
//! - `distance`: bit-string Hamming distance and its percentage form
//! - `analyzer`: digesting and assembling the comparison table

mod analyzer;
mod distance;
mod variants;

pub use analyzer::{AvalancheAnalyzer, AvalancheReport, AvalancheRow, DigestResult};
pub use distance::{HammingComparison, hamming_distance};
pub use variants::{Mutation, Variant, build_variants};
