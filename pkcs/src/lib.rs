//! Private key record decoders.
//!
//! - [`pkcs1`]: RSA private keys (RFC 8017)
//! - [`sec1`]: elliptic curve private keys (RFC 5915)
//! - [`pkcs8`]: algorithm-tagged private keys (RFC 5958)
//!
//! [`PrivateKey::from_der`] detects which of the three a DER blob holds.

pub mod error;
pub mod pkcs1;
pub mod pkcs8;
mod private_key;
pub mod sec1;
#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use private_key::{KeyAlgorithm, PrivateKey, PrivateKeyExt};
