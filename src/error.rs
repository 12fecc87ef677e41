//! Error taxonomy for the demonstration core.
//!
//! Every fallible operation in the crate returns [`Result`]. A signature that
//! parses but does not verify is *not* an error: verification reports it as
//! `false`. Only input that cannot be interpreted at all ends up here.

use thiserror::Error;

use crate::session::SessionState;

/// Errors produced by key generation, signing, decoding and digesting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The entropy source or the curve implementation could not produce a key.
    #[error("key generation failed: {reason}")]
    KeyGeneration { reason: String },

    /// The private key was rejected by the signing backend.
    #[error("signing failed: {reason}")]
    Signing { reason: String },

    /// Signature text or bytes do not have the shape the scheme requires.
    #[error("malformed signature: {reason}")]
    MalformedSignature { reason: String },

    /// Hex text has an odd number of characters.
    #[error("invalid hex: odd length {len}")]
    OddHexLength { len: usize },

    /// Hex text contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex: character {character:?} at index {index}")]
    InvalidHexCharacter { character: char, index: usize },

    /// The digest backend failed unexpectedly.
    #[error("digest failed: {reason}")]
    Digest { reason: String },

    /// A session operation was called from a state that does not allow it.
    #[error("cannot {operation} while session is {state}")]
    InvalidTransition {
        state: SessionState,
        operation: &'static str,
    },
}

impl Error {
    /// Returns `true` for both flavours of malformed hex text.
    pub fn is_invalid_hex(&self) -> bool {
        matches!(
            self,
            Error::OddHexLength { .. } | Error::InvalidHexCharacter { .. }
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
