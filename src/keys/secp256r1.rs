//! ECDSA P-256 key types.

use std::fmt;

use p256::ecdsa::{SigningKey, VerifyingKey};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::encoding::bytes_to_hex;
use crate::error::{Error, Result};
use crate::hash::sha256;

/// Length of a P-256 secret scalar, in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// Length of an uncompressed SEC1 P-256 public key, in bytes.
pub const PUBLIC_KEY_LEN: usize = 65;

/// A P-256 verifying key.
///
/// Immutable and cheap to copy. Equality compares curve points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    /// Uncompressed SEC1 encoding: `0x04 || X || Y`.
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.0.to_sec1_bytes().to_vec()
    }

    /// Lowercase hex of [`PublicKey::to_sec1_bytes`].
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.to_sec1_bytes())
    }

    /// SHA-256 of the SEC1 encoding, as lowercase hex.
    ///
    /// Identifies a key in logs and on screen without printing the key.
    pub fn fingerprint(&self) -> String {
        bytes_to_hex(&sha256(&self.to_sec1_bytes()))
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A P-256 signing key.
///
/// Has no accessor for the scalar and redacts itself in
/// `Debug` output.
#[derive(Clone)]
pub struct PrivateKey(SigningKey);

impl PrivateKey {
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// A matched P-256 key pair.
///
/// Both halves are fixed at construction; there is no way to swap one
/// without building a new pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl KeyPair {
    /// Generates a fresh key pair from operating-system entropy.
    ///
    /// Fails with [`Error::KeyGeneration`] if the entropy source is
    /// unavailable. A candidate scalar outside `[1, n)` is drawn again;
    /// the chance of that happening is below 2⁻³².
    pub fn generate() -> Result<Self> {
        let mut seed = [0u8; SECRET_KEY_LEN];

        loop {
            OsRng
                .try_fill_bytes(&mut seed)
                .map_err(|e| Error::KeyGeneration {
                    reason: format!("entropy source unavailable: {e}"),
                })?;

            let candidate = SigningKey::from_slice(&seed);
            seed.fill(0);

            if let Ok(signing_key) = candidate {
                return Ok(Self::from_signing_key(signing_key));
            }
        }
    }

    /// Builds a key pair from a big-endian secret scalar.
    ///
    /// Intended for deterministic fixtures. Fails with
    /// [`Error::KeyGeneration`] if `secret` is not 32 bytes or is not a valid
    /// scalar (zero or not below the curve order).
    pub fn from_secret_bytes(secret: &[u8]) -> Result<Self> {
        if secret.len() != SECRET_KEY_LEN {
            return Err(Error::KeyGeneration {
                reason: format!(
                    "secret scalar must be {SECRET_KEY_LEN} bytes, got {}",
                    secret.len()
                ),
            });
        }

        let signing_key = SigningKey::from_slice(secret).map_err(|_| Error::KeyGeneration {
            reason: "secret scalar is zero or not below the P-256 order".to_string(),
        })?;

        Ok(Self::from_signing_key(signing_key))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let public_key = PublicKey(*signing_key.verifying_key());

        Self {
            public_key,
            private_key: PrivateKey(signing_key),
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}
