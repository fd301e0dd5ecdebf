//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts a source type `T` into a destination type
//! `D`. The keyguard crates chain these conversions to peel a private key
//! out of its textual envelope one layer at a time.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` performs the conversion.
//! 2. `DecodableFrom<T>` marks `D` as a legal destination for `T`.
//!
//! # Implementation Guide
//!
//! ```no_run
//! use keyguard::decoder::{Decoder, DecodableFrom};
//!
//! struct Source(Vec<u8>);
//! struct Dest(usize);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Source> for Dest {}
//!
//! impl Decoder<Source, Dest> for Source {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Dest, Self::Error> {
//!         Ok(Dest(self.0.len()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type, usually with `T = Self`. When a source
/// type can be decoded into several destinations, callers pick one with a
/// type annotation:
///
/// ```ignore
/// let der: Der = bytes.decode()?;
/// let key: PrivateKey = element.decode()?;
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if `self` is not a valid encoding of `D`.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It carries no methods. Implement it next to each `Decoder` impl so that
/// only explicitly declared conversions type-check.
pub trait DecodableFrom<T> {}
