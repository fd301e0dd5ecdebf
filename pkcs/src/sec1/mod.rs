//! SEC1 - Elliptic Curve Private Key Structure
//!
//! This module implements the ECPrivateKey structure as defined in
//! [RFC 5915](https://datatracker.ietf.org/doc/html/rfc5915) (Elliptic Curve Private Key Format).

mod curve;
pub mod error;
mod types;

pub use curve::NamedCurve;
pub use error::{Error, Result};
pub use types::{ECParameters, ECPrivateKey, Version};
