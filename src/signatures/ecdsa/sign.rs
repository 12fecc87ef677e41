use p256::ecdsa::Signature as RawSignature;
use p256::ecdsa::signature::Signer;

use crate::error::{Error, Result};
use crate::keys::PrivateKey;
use crate::signatures::{SIGNATURE_LEN, Signature};

/// Signs SHA-256(`message`) under `private_key` and returns `r || s`.
pub(crate) fn ecdsa_sign(message: &[u8], private_key: &PrivateKey) -> Result<Signature> {
    let raw: RawSignature = private_key
        .signing_key()
        .try_sign(message)
        .map_err(|e| Error::Signing {
            reason: e.to_string(),
        })?;

    let mut out = [0u8; SIGNATURE_LEN];
    out.copy_from_slice(&raw.to_bytes());

    Ok(Signature::from_array(out))
}
