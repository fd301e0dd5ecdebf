//! Error types for ASN.1 element decoding.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while turning DER TLVs into typed elements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    // Boolean errors
    #[error("BOOLEAN: invalid encoding")]
    InvalidBoolean,

    // Integer errors
    #[error("INTEGER: no data")]
    IntegerNoData,
    #[error("INTEGER: value out of range for i64")]
    IntegerOutOfRangeI64,

    // Null errors
    #[error("NULL: must not carry content ({0} bytes)")]
    NullWithContent(usize),

    // ObjectIdentifier errors
    #[error("OBJECT IDENTIFIER: no data")]
    ObjectIdentifierNoData,
    #[error("OBJECT IDENTIFIER: incomplete encoding")]
    ObjectIdentifierIncompleteEncoding,
    #[error("OBJECT IDENTIFIER: non-minimal sub-identifier encoding")]
    ObjectIdentifierNonMinimal,
    #[error("OBJECT IDENTIFIER: sub-identifier does not fit in 64 bits")]
    ObjectIdentifierComponentOverflow,
    #[error("OBJECT IDENTIFIER: too few components (need at least 2)")]
    ObjectIdentifierTooFewComponents,
    #[error("OBJECT IDENTIFIER: invalid component '{0}'")]
    ObjectIdentifierInvalidComponent(String),
    #[error("parse int error: {0}")]
    ParseInt(ParseIntError),

    // BitString errors
    #[error("BIT STRING: no data")]
    BitStringNoData,
    #[error("BIT STRING: unused bits {0} out of range (must be 0-7)")]
    BitStringUnusedBitsOutOfRange(u8),
    #[error("BIT STRING: {0} unused bits declared without any content")]
    BitStringUnusedBitsWithoutData(u8),
}
