//! Asymmetric key material.
//!
//! This module defines algorithm-specific key representations. No signing
//! or verification logic lives here, only key structure, generation and
//! encoding. The algorithms that consume these keys live in
//! [`crate::signatures`].
//!
//! ## secp256r1
//!
//! The `secp256r1` module holds ECDSA key pairs over the NIST P-256 curve
//! (also known as prime256v1). Keys are generated from operating-system
//! entropy and live in memory only: there is no storage, import or export
//! format beyond the raw scalar needed to build deterministic fixtures.

pub mod secp256r1;

pub use secp256r1::{KeyPair, PrivateKey, PublicKey};
