use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("expected SEQUENCE")]
    ExpectedSequence,

    #[error("expected {expected} elements, got {actual}")]
    InvalidElementCount { expected: usize, actual: usize },

    #[error("expected INTEGER for {field}")]
    ExpectedInteger { field: &'static str },

    #[error("Invalid version: {0} (must be 0 for two-prime or 1 for multi-prime)")]
    InvalidVersion(i64),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("version out of range for i64")]
    VersionOutOfRange,

    #[error("otherPrimeInfos must hold at least one OtherPrimeInfo")]
    EmptyOtherPrimeInfos,

    #[error("OtherPrimeInfo must be a SEQUENCE of three INTEGERs")]
    InvalidOtherPrimeInfo,
}

pub type Result<T> = std::result::Result<T, Error>;
