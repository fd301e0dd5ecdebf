//! SEC1 (RFC 5915) error types

use thiserror::Error;

/// Errors that can occur when decoding SEC1 structures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Expected a SEQUENCE element but got something else
    #[error("expected SEQUENCE")]
    ExpectedSequence,

    /// Expected an INTEGER element but got something else
    #[error("expected INTEGER for {0}")]
    ExpectedInteger(&'static str),

    /// Expected an OCTET STRING element but got something else
    #[error("expected OCTET STRING for privateKey, got {0}")]
    ExpectedOctetString(&'static str),

    /// The privateKey OCTET STRING holds no bytes
    #[error("privateKey is empty")]
    EmptyPrivateKey,

    /// The `[1]` publicKey field does not hold a BIT STRING
    #[error("expected BIT STRING for publicKey, got {0}")]
    ExpectedBitString(&'static str),

    /// A required field is absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid version number (must be 1 for ecPrivkeyVer1)
    #[error("invalid version: expected 1 (ecPrivkeyVer1), got {0}")]
    InvalidVersion(i64),

    /// Version integer value is out of range for i64
    #[error("version integer out of range")]
    VersionOutOfRange,

    /// Unknown or unsupported elliptic curve OID
    #[error("unknown curve OID: {0}")]
    UnknownCurve(String),

    /// The `[0]` parameters field is not a named curve, specified curve or NULL
    #[error("invalid EC parameters: {0}")]
    InvalidParameters(&'static str),

    /// An element that is not allowed at this position
    #[error("unexpected {0} element")]
    UnexpectedElement(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
