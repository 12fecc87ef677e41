//! ECDSA over NIST P-256 with SHA-256, backed by the `p256` crate.
//!
//! Signing is deterministic (RFC 6979): the same key and message always
//! produce the same signature, which is what makes fixed test vectors
//! possible. Signatures are not normalised to low-S.

mod sign;
mod verify;

use crate::error::Result;
use crate::keys::{KeyPair, PrivateKey, PublicKey};

use super::{Signature, SignatureProvider};

use sign::ecdsa_sign;
use verify::ecdsa_verify;

/// The default [`SignatureProvider`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaP256;

impl SignatureProvider for EcdsaP256 {
    fn name(&self) -> &'static str {
        "ECDSA P-256 / SHA-256"
    }

    fn generate_keypair(&self) -> Result<KeyPair> {
        KeyPair::generate()
    }

    fn sign(&self, message: &[u8], private_key: &PrivateKey) -> Result<Signature> {
        ecdsa_sign(message, private_key)
    }

    fn verify(&self, message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
        ecdsa_verify(message, signature, public_key)
    }
}
