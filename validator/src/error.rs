use thiserror::Error;

use crate::result::{ErrorKind, ErrorPosition, ValidationResult};

/// Reasons a candidate key is rejected.
///
/// The display text of each variant is the user-facing message carried by
/// the resulting [`ValidationResult`]. Lower-layer decoding errors stay
/// reachable through `source()` for logging.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Private key cannot be empty.")]
    EmptyInput,

    #[error("Private key is {len} bytes, exceeding the maximum accepted size of {max} bytes.")]
    InputTooLarge { len: usize, max: usize },

    #[error("Invalid private key header.")]
    InvalidHeader,

    #[error("Invalid private key footer.")]
    InvalidFooter { line: usize },

    #[error("Private key footer does not match header.")]
    FooterMismatch { line: usize },

    #[error("Invalid private key format or corrupted data.")]
    Envelope(#[from] keyguard_pem::error::Error),

    #[error("No valid private key PEM block found.")]
    NoKeyBlock,

    #[error("Encrypted private keys are not supported.")]
    Encrypted,

    #[error("Invalid private key format or corrupted data.")]
    KeyBody(#[from] keyguard_pkcs::Error),

    #[error("Unsupported private key type: {0}")]
    UnsupportedKeyType(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput => ErrorKind::EmptyInput,
            Error::InvalidHeader | Error::NoKeyBlock | Error::UnsupportedKeyType(_) => {
                ErrorKind::InvalidHeader
            }
            Error::InvalidFooter { .. } | Error::FooterMismatch { .. } => ErrorKind::InvalidFooter,
            Error::InputTooLarge { .. }
            | Error::Envelope(_)
            | Error::Encrypted
            | Error::KeyBody(_) => ErrorKind::InvalidBody,
        }
    }

    pub fn position(&self) -> Option<ErrorPosition> {
        match self {
            Error::InvalidHeader => Some(ErrorPosition::new(1, 1)),
            Error::InvalidFooter { line } | Error::FooterMismatch { line } => {
                Some(ErrorPosition::new(*line, 1))
            }
            Error::Envelope(err) => err
                .position()
                .map(|(line, column)| ErrorPosition::new(line, column)),
            _ => None,
        }
    }

    /// Pipeline stage that produced the error.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::EmptyInput | Error::InputTooLarge { .. } => "frame",
            Error::InvalidHeader | Error::InvalidFooter { .. } | Error::FooterMismatch { .. } => {
                "match"
            }
            Error::Envelope(_) | Error::NoKeyBlock => "decode",
            Error::Encrypted | Error::KeyBody(_) | Error::UnsupportedKeyType(_) => "parse",
        }
    }
}

impl From<Error> for ValidationResult {
    fn from(err: Error) -> Self {
        ValidationResult::invalid(err.kind(), err.to_string(), err.position())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
