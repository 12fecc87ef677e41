//! Hands-on demonstrations of two cryptographic properties.
//!
//! This crate is the logic behind an interactive teaching tool. It shows:
//!
//! - that an ECDSA signature breaks when a single bit of the message or of
//!   the signature changes, and
//! - that a 256-bit digest flips roughly half of its output bits when the
//!   input changes by a single character or a single bit (the avalanche
//!   effect).
//!
//! Presentation is someone else's job. Every operation here is a plain
//! function of its inputs that returns a value or a typed [`Error`]; the
//! only state is the optional [`session::SigningSession`] that encodes which
//! demo step may follow which.
//!
//! # Module overview
//!
//! - `encoding`
//!   Lowercase fixed-width hex, big-endian bit strings and single-bit
//!   flips. Shared by both demonstrations.
//!
//! - `hash`
//!   The [`hash::DigestProvider`] capability and SHA-256, both as a
//!   from-scratch FIPS 180-4 implementation and through the `sha2` crate.
//!
//! - `keys`
//!   ECDSA P-256 key pairs. Key structure and generation only; no
//!   signing logic lives there.
//!
//! - `signatures`
//!   The [`signatures::Signature`] value type, the
//!   [`signatures::SignatureProvider`] capability, its `p256` backed
//!   implementation, and the text-level [`signatures::SignatureService`].
//!
//! - `avalanche`
//!   Builds the six fixed variants of an input, digests them, and measures
//!   each digest's Hamming distance from the original.
//!
//! - `session`
//!   The `NoKeys -> KeysReady -> Signed -> Verified` walk a signing demo
//!   follows, with guarded transitions.
//!
//! # Non-goals
//!
//! This is not a general-purpose cryptographic library. Keys exist only in
//! memory, exactly one signature scheme and one digest are supported, and
//! nothing here is hardened against timing side channels.

pub mod avalanche;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod keys;
pub mod session;
pub mod signatures;

pub use avalanche::{AvalancheAnalyzer, AvalancheReport, DigestResult, HammingComparison};
pub use encoding::{bytes_to_hex, hex_to_bits, hex_to_bytes};
pub use error::{Error, Result};
pub use keys::KeyPair;
pub use session::{SessionState, SigningSession};
pub use signatures::{EcdsaP256, Signature, SignatureService};

/// Runs the avalanche demonstration with the default SHA-256 provider.
pub fn run_avalanche(input: &str) -> Result<AvalancheReport> {
    AvalancheAnalyzer::new().run(input)
}
