//! # keyguard
//!
//! Core traits shared by the keyguard private-key validation crates.
//!
//! Every stage of key validation is a typed conversion from one
//! representation to the next:
//!
//! ```text
//! &str → Pem → Vec<u8> → Der → ASN1Object → PrivateKey
//! ```
//!
//! Each step is expressed with the [`decoder::Decoder`] trait, so a stage
//! only has to know its immediate input and output types. The
//! [`decoder::DecodableFrom`] marker restricts the set of legal
//! conversions at compile time.
//!
//! ## Example
//!
//! ```ignore
//! use keyguard::decoder::Decoder;
//! use keyguard_der::Der;
//! use keyguard_asn1::ASN1Object;
//!
//! let bytes = vec![0x30, 0x03, 0x02, 0x01, 0x00];
//! let der: Der = bytes.decode().unwrap();
//! let asn1: ASN1Object = der.decode().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
