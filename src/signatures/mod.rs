//! Digital signatures.
//!
//! The signature scheme is fixed: ECDSA over NIST P-256 with SHA-256 as the
//! message pre-hash, signatures carried as the raw 64-byte `r || s` form.
//!
//! - [`Signature`] is the value type and its hex text form.
//! - [`SignatureProvider`] is the capability the rest of the crate signs and
//!   verifies through, so a deterministic backend can stand in for tests.
//! - [`EcdsaP256`] is the provider backed by the `p256` crate.
//! - [`SignatureService`] is the text-level API: UTF-8 messages in,
//!   hex signatures out, tamper-friendly verification.

mod ecdsa;
mod provider;
mod service;
mod signature;

pub use ecdsa::EcdsaP256;
pub use provider::SignatureProvider;
pub use service::SignatureService;
pub use signature::{SIGNATURE_LEN, Signature};
