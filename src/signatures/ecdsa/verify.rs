use p256::ecdsa::Signature as RawSignature;
use p256::ecdsa::signature::Verifier;

use crate::keys::PublicKey;
use crate::signatures::Signature;

/// Verifies `signature` over SHA-256(`message`) against `public_key`.
///
/// A 64-byte value whose `r` or `s` is zero or not below the curve order
/// cannot be a valid signature and is reported as `false`, like any other
/// mismatch.
pub(crate) fn ecdsa_verify(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(raw) = RawSignature::from_slice(signature.as_bytes()) else {
        return false;
    };

    public_key.verifying_key().verify(message, &raw).is_ok()
}
