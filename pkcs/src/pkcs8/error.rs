use thiserror::Error;

use crate::private_key::KeyAlgorithm;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid version: {0}")]
    InvalidVersion(i64),

    #[error("version out of range for i64")]
    VersionOutOfRange,

    #[error("expected SEQUENCE")]
    ExpectedSequence,

    #[error("expected INTEGER for {field}")]
    ExpectedInteger { field: &'static str },

    #[error("expected OCTET STRING for {field}")]
    ExpectedOctetString { field: &'static str },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid algorithm identifier")]
    InvalidAlgorithmIdentifier,

    #[error("unexpected {0} element")]
    UnexpectedElement(&'static str),

    #[error("publicKey requires version v2")]
    PublicKeyRequiresV2,

    #[error("{algorithm} private key must be {expected} bytes, got {actual}")]
    InvalidCurveKeyLength {
        algorithm: KeyAlgorithm,
        expected: usize,
        actual: usize,
    },

    #[error("empty ASN1Object")]
    EmptyAsn1Object,

    #[error("{0} unexpected element(s) after the inner private key")]
    TrailingElements(usize),

    #[error("ASN.1 error: {0}")]
    Asn1(#[from] keyguard_asn1::error::Error),

    #[error("DER error: {0}")]
    Der(#[from] keyguard_der::error::Error),

    #[error("inner RSA private key: {0}")]
    Rsa(#[from] crate::pkcs1::Error),

    #[error("inner EC private key: {0}")]
    Ec(#[from] crate::sec1::Error),
}
