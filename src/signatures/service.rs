use tracing::debug;

use crate::error::Result;
use crate::keys::{KeyPair, PrivateKey, PublicKey};

use super::{EcdsaP256, Signature, SignatureProvider};

/// Text-level signing API.
///
/// Messages are arbitrary strings, signed and verified as their UTF-8
/// bytes. The service holds no key material and no per-call state; one
/// instance can be shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct SignatureService<P = EcdsaP256> {
    provider: P,
}

impl SignatureService<EcdsaP256> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: SignatureProvider> SignatureService<P> {
    /// Builds a service over a custom provider (e.g. a seeded fixture).
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Produces a fresh key pair.
    ///
    /// # Errors
    /// [`crate::Error::KeyGeneration`] if the provider cannot produce one.
    pub fn generate_key_pair(&self) -> Result<KeyPair> {
        let pair = self.provider.generate_keypair()?;

        debug!(
            scheme = self.provider.name(),
            fingerprint = %pair.public_key().fingerprint(),
            "generated key pair"
        );

        Ok(pair)
    }

    /// Signs the UTF-8 encoding of `message`.
    ///
    /// # Errors
    /// [`crate::Error::Signing`] if the provider rejects the key.
    pub fn sign(&self, message: &str, private_key: &PrivateKey) -> Result<Signature> {
        let signature = self.provider.sign(message.as_bytes(), private_key)?;

        debug!(
            message_len = message.len(),
            signature = %signature,
            "signed message"
        );

        Ok(signature)
    }

    /// Verifies `signature` over the UTF-8 encoding of `message`.
    ///
    /// Any mismatch (other message, altered signature, other key) yields
    /// `false`; this never fails.
    pub fn verify(&self, message: &str, signature: &Signature, public_key: &PublicKey) -> bool {
        let valid = self
            .provider
            .verify(message.as_bytes(), signature, public_key);

        debug!(
            message_len = message.len(),
            fingerprint = %public_key.fingerprint(),
            valid,
            "verified signature"
        );

        valid
    }

    /// Verifies a signature supplied as hex text.
    ///
    /// # Errors
    /// [`crate::Error::MalformedSignature`] if `signature_hex` is not hex or
    /// does not decode to exactly 64 bytes. A well-formed signature that does
    /// not verify is `Ok(false)`.
    pub fn verify_hex(
        &self,
        message: &str,
        signature_hex: &str,
        public_key: &PublicKey,
    ) -> Result<bool> {
        let signature = Signature::from_hex(signature_hex)?;
        Ok(self.verify(message, &signature, public_key))
    }
}
