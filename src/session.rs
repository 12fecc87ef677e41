//! Interactive signing session.
//!
//! The signing core is stateless; a demo that walks a user through
//! "generate, sign, verify, tamper" needs a small amount of state to decide
//! which step is legal next. That state lives here as an enum-tagged stage:
//!
//! ```text
//! NoKeys --generate_keys--> KeysReady --sign--> Signed --verify*--> Verified
//!                                                  ^                    |
//!                                                  +-------sign---------+
//! ```
//!
//! `verify*` is any of [`SigningSession::verify`],
//! [`SigningSession::verify_tampered_message`] and
//! [`SigningSession::verify_tampered_signature`]. Verifying again from
//! `Verified` replaces the previous outcome but keeps the signature. Signing
//! from `Verified` replaces the signature and clears the outcome.
//!
//! Calling an operation from a stage that does not allow it returns
//! [`Error::InvalidTransition`] and leaves the session untouched.

use std::fmt;
use std::mem;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::keys::{KeyPair, PublicKey};
use crate::signatures::{EcdsaP256, Signature, SignatureProvider, SignatureService};

/// Observable stage of a [`SigningSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NoKeys,
    KeysReady,
    Signed,
    Verified,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::NoKeys => "without keys",
            SessionState::KeysReady => "ready to sign",
            SessionState::Signed => "signed",
            SessionState::Verified => "verified",
        };
        f.write_str(name)
    }
}

/// What was checked against the current signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationKind {
    /// The signed message and the signature as produced.
    Original,
    /// A caller-supplied message against the produced signature.
    TamperedMessage,
    /// The signed message against a caller-supplied signature.
    TamperedSignature,
}

/// Result of the most recent verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VerificationOutcome {
    pub kind: VerificationKind,
    pub valid: bool,
}

#[derive(Clone, Debug)]
struct SignedMessage {
    message: String,
    signature: Signature,
}

#[derive(Clone, Debug)]
enum Stage {
    NoKeys,
    KeysReady {
        keys: KeyPair,
    },
    Signed {
        keys: KeyPair,
        signed: SignedMessage,
    },
    Verified {
        keys: KeyPair,
        signed: SignedMessage,
        outcome: VerificationOutcome,
    },
}

impl Stage {
    fn state(&self) -> SessionState {
        match self {
            Stage::NoKeys => SessionState::NoKeys,
            Stage::KeysReady { .. } => SessionState::KeysReady,
            Stage::Signed { .. } => SessionState::Signed,
            Stage::Verified { .. } => SessionState::Verified,
        }
    }

    fn keys(&self) -> Option<&KeyPair> {
        match self {
            Stage::NoKeys => None,
            Stage::KeysReady { keys } | Stage::Signed { keys, .. } | Stage::Verified { keys, .. } => {
                Some(keys)
            }
        }
    }

    fn into_keys(self) -> Option<KeyPair> {
        match self {
            Stage::NoKeys => None,
            Stage::KeysReady { keys } | Stage::Signed { keys, .. } | Stage::Verified { keys, .. } => {
                Some(keys)
            }
        }
    }

    fn signed(&self) -> Option<(&KeyPair, &SignedMessage)> {
        match self {
            Stage::Signed { keys, signed } | Stage::Verified { keys, signed, .. } => {
                Some((keys, signed))
            }
            _ => None,
        }
    }
}

/// One user's walk through key generation, signing and verification.
///
/// Owns its key pair exclusively; nothing is shared between sessions.
pub struct SigningSession<P = EcdsaP256> {
    service: SignatureService<P>,
    stage: Stage,
}

impl SigningSession<EcdsaP256> {
    pub fn new() -> Self {
        Self::with_service(SignatureService::new())
    }
}

impl Default for SigningSession<EcdsaP256> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SignatureProvider> SigningSession<P> {
    pub fn with_service(service: SignatureService<P>) -> Self {
        Self {
            service,
            stage: Stage::NoKeys,
        }
    }

    pub fn state(&self) -> SessionState {
        self.stage.state()
    }

    pub fn public_key(&self) -> Option<&PublicKey> {
        self.stage.keys().map(KeyPair::public_key)
    }

    /// The message covered by the current signature.
    pub fn message(&self) -> Option<&str> {
        self.stage.signed().map(|(_, s)| s.message.as_str())
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.stage.signed().map(|(_, s)| &s.signature)
    }

    /// Outcome of the latest verification, cleared by re-signing.
    pub fn outcome(&self) -> Option<VerificationOutcome> {
        match &self.stage {
            Stage::Verified { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    /// `NoKeys -> KeysReady`.
    pub fn generate_keys(&mut self) -> Result<&PublicKey> {
        if !matches!(self.stage, Stage::NoKeys) {
            return Err(self.invalid("generate keys"));
        }

        let keys = self.service.generate_key_pair()?;
        self.stage = Stage::KeysReady { keys };

        self.public_key().ok_or_else(|| Error::KeyGeneration {
            reason: "key pair missing after generation".to_string(),
        })
    }

    /// `KeysReady | Verified -> Signed`.
    pub fn sign(&mut self, message: &str) -> Result<Signature> {
        let signature = match &self.stage {
            Stage::KeysReady { keys } | Stage::Verified { keys, .. } => {
                self.service.sign(message, keys.private_key())?
            }
            _ => return Err(self.invalid("sign")),
        };

        if let Some(keys) = mem::replace(&mut self.stage, Stage::NoKeys).into_keys() {
            self.stage = Stage::Signed {
                keys,
                signed: SignedMessage {
                    message: message.to_string(),
                    signature,
                },
            };
        }

        Ok(signature)
    }

    /// `Signed | Verified -> Verified`: checks the signature as produced.
    pub fn verify(&mut self) -> Result<VerificationOutcome> {
        self.verify_with(VerificationKind::Original, None, None)
    }

    /// `Signed | Verified -> Verified`: checks `tampered` against the
    /// current signature.
    pub fn verify_tampered_message(&mut self, tampered: &str) -> Result<VerificationOutcome> {
        self.verify_with(VerificationKind::TamperedMessage, Some(tampered), None)
    }

    /// `Signed | Verified -> Verified`: checks the signed message against
    /// a signature given as hex text.
    ///
    /// # Errors
    /// [`Error::MalformedSignature`] if the text is not 64 bytes of hex; the
    /// session is left as it was.
    pub fn verify_tampered_signature(&mut self, signature_hex: &str) -> Result<VerificationOutcome> {
        if self.stage.signed().is_none() {
            return Err(self.invalid("verify"));
        }

        let signature = Signature::from_hex(signature_hex)?;
        self.verify_with(VerificationKind::TamperedSignature, None, Some(signature))
    }

    fn verify_with(
        &mut self,
        kind: VerificationKind,
        message: Option<&str>,
        signature: Option<Signature>,
    ) -> Result<VerificationOutcome> {
        let Some((keys, signed)) = self.stage.signed() else {
            return Err(self.invalid("verify"));
        };

        let message = message.unwrap_or(&signed.message);
        let signature = signature.unwrap_or(signed.signature);
        let valid = self.service.verify(message, &signature, keys.public_key());
        let outcome = VerificationOutcome { kind, valid };

        self.stage = match mem::replace(&mut self.stage, Stage::NoKeys) {
            Stage::Signed { keys, signed } | Stage::Verified { keys, signed, .. } => {
                Stage::Verified {
                    keys,
                    signed,
                    outcome,
                }
            }
            other => other,
        };

        Ok(outcome)
    }

    fn invalid(&self, operation: &'static str) -> Error {
        Error::InvalidTransition {
            state: self.state(),
            operation,
        }
    }
}
