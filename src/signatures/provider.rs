use crate::error::Result;
use crate::keys::{KeyPair, PrivateKey, PublicKey};

use super::Signature;

/// Key generation, signing and verification for the fixed scheme.
///
/// `verify` is infallible by contract: anything that reaches it is already a
/// well-formed [`Signature`], so the only possible answers are "valid" and
/// "not valid".
pub trait SignatureProvider {
    /// Short scheme label, e.g. `"ECDSA P-256 / SHA-256"`.
    fn name(&self) -> &'static str;

    /// Produces a fresh key pair.
    fn generate_keypair(&self) -> Result<KeyPair>;

    /// Signs `message` under `private_key`.
    fn sign(&self, message: &[u8], private_key: &PrivateKey) -> Result<Signature>;

    /// Checks `signature` over `message` against `public_key`.
    fn verify(&self, message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool;
}

impl<P: SignatureProvider + ?Sized> SignatureProvider for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn generate_keypair(&self) -> Result<KeyPair> {
        (**self).generate_keypair()
    }

    fn sign(&self, message: &[u8], private_key: &PrivateKey) -> Result<Signature> {
        (**self).sign(message, private_key)
    }

    fn verify(&self, message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
        (**self).verify(message, signature, public_key)
    }
}
