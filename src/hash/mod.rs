//! Digest functions and the capability used to plug them in.
//!
//! The avalanche analyzer only ever needs one thing from a hash function:
//! a fixed 256-bit output for an arbitrary byte string. That contract is the
//! [`DigestProvider`] trait. Two providers ship with the crate:
//!
//! - [`Sha256`], the pure-Rust SHA-256 implemented in [`sha256`],
//! - [`Sha2`], backed by the `sha2` crate, kept as an independent reference.
//!
//! Both are zero-sized, stateless and interchangeable.

pub mod sha256;

mod provider;

pub use provider::{DIGEST_BITS, DIGEST_LEN, DigestProvider, Sha2, Sha256};

/// Re-export of the SHA-256 convenience function.
pub use sha256::core::sha256;
