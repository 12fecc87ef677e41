use sha2::Digest as _;

use crate::error::Result;

/// Output size of every digest in this crate, in bytes.
pub const DIGEST_LEN: usize = 32;

/// Output size of every digest in this crate, in bits.
pub const DIGEST_BITS: usize = DIGEST_LEN * 8;

/// A fixed 256-bit cryptographic digest.
///
/// Implementations must be pure: the same input always yields the same
/// output. The only permitted failure is an unexpected backend fault, which
/// is reported as [`crate::Error::Digest`].
pub trait DigestProvider {
    /// Short algorithm label, e.g. `"SHA-256"`.
    fn name(&self) -> &'static str;

    /// Digests `bytes`.
    fn digest(&self, bytes: &[u8]) -> Result<[u8; DIGEST_LEN]>;
}

impl<D: DigestProvider + ?Sized> DigestProvider for &D {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn digest(&self, bytes: &[u8]) -> Result<[u8; DIGEST_LEN]> {
        (**self).digest(bytes)
    }
}

/// SHA-256 computed by this crate's own implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl DigestProvider for Sha256 {
    fn name(&self) -> &'static str {
        "SHA-256"
    }

    fn digest(&self, bytes: &[u8]) -> Result<[u8; DIGEST_LEN]> {
        Ok(super::sha256(bytes))
    }
}

/// SHA-256 computed by the `sha2` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha2;

impl DigestProvider for Sha2 {
    fn name(&self) -> &'static str {
        "SHA-256 (sha2)"
    }

    fn digest(&self, bytes: &[u8]) -> Result<[u8; DIGEST_LEN]> {
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&sha2::Sha256::digest(bytes));
        Ok(out)
    }
}
